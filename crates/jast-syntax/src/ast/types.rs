use super::{
    ArrayDimensions, ArrayType, ArrayTypeDim, AtLeastOneChildOfType as _, ClassType,
    PrimitiveType, Type, TypeArguments, child, children,
};
use crate::{Primitive, TypeInfo};

impl PrimitiveType<'_> {
    #[inline]
    pub fn primitive(self) -> Option<Primitive> {
        self.0.image().and_then(Primitive::from_keyword)
    }
}

impl<'a> ClassType<'a> {
    /// The name as written, possibly qualified.
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }

    pub fn simple_name(self) -> Option<&'a str> {
        let name = self.name()?;
        Some(name.rsplit('.').next().unwrap_or(name))
    }

    #[inline]
    pub fn type_arguments(self) -> Option<TypeArguments<'a>> {
        child(self.0)
    }

    /// Whether the type arguments are written as `<>`.
    pub fn is_diamond(self) -> bool {
        self.type_arguments().is_some_and(TypeArguments::is_diamond)
    }
}

impl<'a> ArrayType<'a> {
    #[inline]
    pub fn element_type(self) -> Option<Type<'a>> {
        child(self.0)
    }

    #[inline]
    pub fn dimensions(self) -> Option<ArrayDimensions<'a>> {
        child(self.0)
    }

    pub fn array_depth(self) -> usize {
        self.dimensions().map_or(0, ArrayDimensions::len)
    }

    /// Whether the last dimension is a varargs `...`.
    pub fn is_varargs(self) -> bool {
        self.dimensions().is_some_and(|dims| dims.last().is_varargs())
    }
}

impl<'a> ArrayDimensions<'a> {
    pub fn dims(self) -> impl Iterator<Item = ArrayTypeDim<'a>> {
        children(self.0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.child_count()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl ArrayTypeDim<'_> {
    #[inline]
    pub fn is_varargs(self) -> bool {
        self.0.image() == Some("...")
    }
}

impl<'a> TypeArguments<'a> {
    pub fn types(self) -> impl Iterator<Item = Type<'a>> {
        children(self.0)
    }

    #[inline]
    pub fn is_diamond(self) -> bool {
        self.0.child_count() == 0
    }
}

impl Type<'_> {
    /// The type as written, without any resolution: names stay as spelled.
    pub fn written_type(self) -> TypeInfo {
        match self {
            Type::PrimitiveType(primitive) => {
                primitive.primitive().map_or(TypeInfo::Unknown, TypeInfo::Primitive)
            }
            Type::ClassType(class) => match class.name() {
                Some(name) => TypeInfo::Class {
                    name: name.into(),
                    arguments: class
                        .type_arguments()
                        .into_iter()
                        .flat_map(TypeArguments::types)
                        .map(Type::written_type)
                        .collect(),
                },
                None => TypeInfo::Unknown,
            },
            Type::ArrayType(array) => match array.element_type() {
                Some(element) => element.written_type().array_of(array.array_depth() as u32),
                None => TypeInfo::Unknown,
            },
        }
    }
}
