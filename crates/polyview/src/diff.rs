use polyview_core::schema::{CompositeDeclaration, Registry};

/// Composite entities to create and drop to move from one set of
/// declarations to another.
///
/// Entities are matched by key only. A declaration whose donors or renames
/// changed while its key stayed the same produces no item: to rebuild its
/// view, declare it under a new key.
#[derive(Debug)]
pub struct DeclarationsDiff<'a> {
    items: Vec<DeclarationsDiffItem<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationsDiffItem<'a> {
    CreateComposite(&'a CompositeDeclaration),
    DropComposite(&'a CompositeDeclaration),
}

impl<'a> DeclarationsDiff<'a> {
    /// Drops come first, in `from` order, followed by creates in `to` order.
    pub fn from(from: &'a Registry, to: &'a Registry) -> Self {
        let mut items = vec![];

        for decl in from.iter() {
            if !to.contains(decl.key()) {
                items.push(DeclarationsDiffItem::DropComposite(decl));
            }
        }

        for decl in to.iter() {
            if !from.contains(decl.key()) {
                items.push(DeclarationsDiffItem::CreateComposite(decl));
            }
        }

        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[DeclarationsDiffItem<'a>] {
        &self.items
    }

    pub fn to_create(&self) -> impl Iterator<Item = &'a CompositeDeclaration> + '_ {
        self.items.iter().filter_map(|item| match item {
            DeclarationsDiffItem::CreateComposite(decl) => Some(*decl),
            DeclarationsDiffItem::DropComposite(_) => None,
        })
    }

    pub fn to_remove(&self) -> impl Iterator<Item = &'a CompositeDeclaration> + '_ {
        self.items.iter().filter_map(|item| match item {
            DeclarationsDiffItem::DropComposite(decl) => Some(*decl),
            DeclarationsDiffItem::CreateComposite(_) => None,
        })
    }
}

impl<'a> IntoIterator for DeclarationsDiff<'a> {
    type Item = DeclarationsDiffItem<'a>;
    type IntoIter = std::vec::IntoIter<DeclarationsDiffItem<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
