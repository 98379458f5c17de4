// Language-agnostic declaration tree. No serde_json::Value here.

/// Reference to a type from a field position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TyRef {
    Null,
    String,
    Number,
    Boolean,
    Untyped,                 // empty arrays; rendering depends on the untyped policy
    Object,                  // anonymous object (array of objects inside a primitive array)
    Named(String),           // a synthesized declaration
    Array(Box<TyRef>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TyRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    pub name: String,
    pub fields: Vec<Field>,  // insertion order of the source object
    pub children: Vec<Decl>, // synthesized nested types, in field order
}

impl Decl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new(), children: Vec::new() }
    }

    /// All declarations of this subtree in document order.
    ///
    /// Each child block is prepended to the ones before it, so siblings come
    /// out in reverse field order, every block precedes its parent, and the
    /// root is always last.
    pub fn flatten(&self) -> Vec<&Decl> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a Decl>) {
        for child in self.children.iter().rev() {
            child.flatten_into(out);
        }
        out.push(self);
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Decl::count).sum::<usize>()
    }
}
