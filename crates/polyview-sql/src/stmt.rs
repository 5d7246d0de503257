mod column_alias;
pub use column_alias::ColumnAlias;

mod create_view;
pub use create_view::CreateView;

mod drop_view;
pub use drop_view::DropView;

mod ident;
pub use ident::Ident;

mod name;
pub use name::Name;

mod select;
pub use select::{Select, SyntheticId, IDENTIFIER_DELIMITER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateView(CreateView),
    DropView(DropView),
}

impl Statement {
    pub fn is_create_view(&self) -> bool {
        matches!(self, Statement::CreateView(_))
    }

    pub fn is_drop_view(&self) -> bool {
        matches!(self, Statement::DropView(_))
    }

    /// Name of the view the statement targets.
    pub fn view_name(&self) -> &Name {
        match self {
            Statement::CreateView(stmt) => &stmt.name,
            Statement::DropView(stmt) => &stmt.name,
        }
    }
}
