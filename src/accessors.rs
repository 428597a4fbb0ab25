//! Getter / setter / fluent `with_` triples for optional fields.
//!
//! Setters take the `Option` so a field can be unset; `with_` always sets
//! `Some` and hands the value back for chaining.

macro_rules! string_field {
    ($field:ident, $setter:ident, $with:ident) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, $field: Option<String>) {
            self.$field = $field;
        }

        #[must_use]
        pub fn $with(mut self, $field: impl Into<String>) -> Self {
            self.$field = Some($field.into());
            self
        }
    };
}

macro_rules! copy_field {
    ($field:ident, $setter:ident, $with:ident, $ty:ty) => {
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        pub fn $setter(&mut self, $field: Option<$ty>) {
            self.$field = $field;
        }

        #[must_use]
        pub fn $with(mut self, $field: $ty) -> Self {
            self.$field = Some($field);
            self
        }
    };
}

macro_rules! ref_field {
    ($field:ident, $setter:ident, $with:ident, $ty:ty) => {
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        pub fn $setter(&mut self, $field: Option<$ty>) {
            self.$field = $field;
        }

        #[must_use]
        pub fn $with(mut self, $field: $ty) -> Self {
            self.$field = Some($field);
            self
        }
    };
}
