mod declaration;
pub use declaration::{CompositeDeclaration, DeclarationBuilder, DeclarationDef, DEFAULT_IDENTIFIER};

mod donor;
pub use donor::{Donor, DonorField, DonorId};

mod entity_key;
pub use entity_key::EntityKey;

mod field_map;
pub use field_map::{FieldMap, FieldMapEntry, FieldSource, RenameSpec};

mod registry;
pub use registry::Registry;

mod resolver;
pub use resolver::{DonorResolver, DonorSet};
