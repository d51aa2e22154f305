/// A struct declaration with its named fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    /// Struct name
    pub name: String,
    /// Named fields in source order; tuple and unit structs have none
    pub fields: Vec<FieldDecl>,
}

/// One named field of a struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field identifier as written (raw identifiers keep their `r#`)
    pub name: String,
    /// Declared type as written, path segments joined with `::`
    pub type_name: String,
    /// Contents of the `apivalidator` attribute, if any
    pub tag: Option<String>,
}

/// One parameter of a function, excluding any `self` receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    /// Name of the parameter type when it is a plain path type (`Foo`, `crate::Foo`
    /// gives `Foo`); `None` for references, tuples and other shapes
    pub type_name: Option<String>,
}

/// A function or method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Function name
    pub name: String,
    /// `Self` type of the enclosing `impl` block; `None` for free functions
    pub receiver: Option<String>,
    /// Whether the function takes a `self` receiver
    pub has_self_receiver: bool,
    /// Parameters after the receiver
    pub params: Vec<ParamDecl>,
    /// Leading doc comment, one line per `///` line
    pub doc: String,
}

impl MethodDecl {
    /// `Receiver::name`, or `name` for free functions
    pub fn qualified_name(&self) -> String {
        match &self.receiver {
            Some(receiver) => format!("{}::{}", receiver, self.name),
            None => self.name.clone(),
        }
    }

    /// Whether the doc comment starts with the routing `marker`
    pub fn is_annotated(&self, marker: &str) -> bool {
        self.doc.trim_start().starts_with(marker)
    }
}

/// A declaration relevant to generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// A struct that may carry tagged fields or serve as a parameter struct
    Struct(StructDecl),
    /// A function that may carry a routing annotation
    Method(MethodDecl),
}

/// Everything the generator needs to know about one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDescription {
    /// Declarations in file order
    pub items: Vec<Declaration>,
}

impl SourceDescription {
    /// All struct declarations in file order
    pub fn structs(&self) -> impl Iterator<Item = &StructDecl> {
        self.items.iter().filter_map(|item| match item {
            Declaration::Struct(decl) => Some(decl),
            Declaration::Method(_) => None,
        })
    }

    /// Methods whose doc comment starts with `marker`, in file order
    pub fn annotated_methods<'a>(
        &'a self,
        marker: &'a str,
    ) -> impl Iterator<Item = &'a MethodDecl> + 'a {
        self.items.iter().filter_map(move |item| match item {
            Declaration::Method(decl) if decl.is_annotated(marker) => Some(decl),
            _ => None,
        })
    }

    /// Look up a struct by name
    pub fn find_struct(&self, name: &str) -> Option<&StructDecl> {
        self.structs().find(|s| s.name == name)
    }
}
