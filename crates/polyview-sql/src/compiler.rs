use crate::{stmt::Statement, Serializer};

use polyview_core::{driver::Flavor, schema::CompositeDeclaration, Result};

/// Renders composite declarations into view definition text.
///
/// Compilation is a pure function of the declaration and the flavor: the same
/// inputs always produce byte-identical output.
#[derive(Debug, Clone, Copy)]
pub struct ViewCompiler {
    serializer: Serializer,
}

impl ViewCompiler {
    pub fn new(flavor: Flavor) -> ViewCompiler {
        ViewCompiler {
            serializer: Serializer::new(flavor),
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.serializer.flavor()
    }

    /// Returns the statement creating the view of `decl`.
    ///
    /// Fails if the declaration has no donors, or if an output field resolves
    /// neither through a rename nor through a same-named field on some donor.
    pub fn compile_create(&self, decl: &CompositeDeclaration) -> Result<String> {
        let stmt = Statement::create_view(decl)?;

        tracing::debug!(
            entity = %decl.key(),
            flavor = %self.flavor(),
            branches = decl.donors().len(),
            "compiled composite view"
        );

        Ok(self.serializer.serialize(&stmt))
    }

    /// Returns the statement dropping the view of `decl`. Dropping a view that
    /// does not exist is not an error.
    pub fn compile_drop(&self, decl: &CompositeDeclaration) -> String {
        self.serializer.serialize(&Statement::drop_view(decl))
    }
}
