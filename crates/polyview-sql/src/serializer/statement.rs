use super::{Delimited, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::CreateView(stmt) => stmt.to_sql(f),
            stmt::Statement::DropView(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateView {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = &self.name;
        let branches = Delimited(&self.branches, "\nUNION\n");

        fmt!(f, "CREATE VIEW " name " AS\n" branches);
    }
}

impl ToSql for &stmt::DropView {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = &self.name;

        if self.if_exists {
            fmt!(f, "DROP VIEW IF EXISTS " name);
        } else {
            fmt!(f, "DROP VIEW " name);
        }
    }
}
