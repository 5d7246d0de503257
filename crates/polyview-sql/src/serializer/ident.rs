use super::{Formatter, ToSql};

use crate::stmt;

/// A quoted identifier. Quote characters inside the name are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let quote = f.serializer.ident_quote();

        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}

impl ToSql for &stmt::Ident {
    fn to_sql(self, f: &mut Formatter<'_>) {
        Ident(&self.0).to_sql(f);
    }
}
