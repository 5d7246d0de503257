use super::{Comma, Literal, ToSql};

use crate::stmt;

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let identifier = &self.identifier;
        let columns = Comma(&self.columns);
        let from = &self.from;

        if self.columns.is_empty() {
            fmt!(f, "SELECT " identifier " FROM " from);
        } else {
            fmt!(f, "SELECT " identifier ", " columns " FROM " from);
        }
    }
}

impl ToSql for &stmt::SyntheticId {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let prefix = Literal(&self.prefix);
        let column = &self.column;
        let alias = &self.alias;

        if f.serializer.is_postgresql() {
            fmt!(f, "concat(" prefix ", " column "::text)");
        } else if f.serializer.is_sqlite() {
            fmt!(f, prefix " || CAST(" column " AS TEXT)");
        } else {
            fmt!(f, "CONCAT(" prefix ", CAST(" column " AS CHAR))");
        }

        fmt!(f, " AS " alias);
    }
}

impl ToSql for &stmt::ColumnAlias {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let column = &self.column;
        let alias = &self.alias;

        if self.is_identity() {
            fmt!(f, column);
        } else {
            fmt!(f, column " AS " alias);
        }
    }
}
