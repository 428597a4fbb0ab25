//! `{Name: value,Name: value}` rendering used by the `Display` impls.

use std::{collections::BTreeMap, fmt};

pub(crate) struct DebugFields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> DebugFields<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    pub fn field<T: fmt::Display + ?Sized>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> Result<&mut Self, fmt::Error> {
        let Some(value) = value else {
            return Ok(self);
        };

        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;

        write!(self.f, "{name}: {value}")?;

        Ok(self)
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Renders a float with a fractional part, `4.0` rather than `4`.
pub(crate) struct Float(pub f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Renders a map as `{key=value, key=value}`.
pub(crate) struct MapDisplay<'a, V>(pub &'a BTreeMap<String, V>);

impl fmt::Display for MapDisplay<'_, f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_map(f, self.0, |f, value| write!(f, "{value:?}"))
    }
}

impl fmt::Display for MapDisplay<'_, Vec<String>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_map(f, self.0, |f, values| write!(f, "[{}]", values.join(", ")))
    }
}

fn write_map<V>(
    f: &mut fmt::Formatter<'_>,
    map: &BTreeMap<String, V>,
    write_value: impl Fn(&mut fmt::Formatter<'_>, &V) -> fmt::Result,
) -> fmt::Result {
    f.write_str("{")?;
    for (index, (key, value)) in map.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}=")?;
        write_value(f, value)?;
    }
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(Option<&'static str>, Option<&'static str>);

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            DebugFields::new(f)?
                .field("First", self.0)?
                .field("Second", self.1)?
                .finish()
        }
    }

    #[test]
    fn skips_absent_fields_without_stray_commas() {
        assert_eq!(Pair(None, None).to_string(), "{}");
        assert_eq!(Pair(Some("a"), None).to_string(), "{First: a}");
        assert_eq!(Pair(None, Some("b")).to_string(), "{Second: b}");
        assert_eq!(Pair(Some("a"), Some("b")).to_string(), "{First: a,Second: b}");
    }

    #[test]
    fn renders_maps_in_key_order() {
        let attributes = BTreeMap::from([
            ("tier".to_string(), vec!["gold".to_string()]),
            ("interests".to_string(), vec!["cats".to_string(), "dogs".to_string()]),
        ]);
        let metrics = BTreeMap::from([("visits".to_string(), 3.5), ("whole".to_string(), 4.0)]);

        assert_eq!(
            MapDisplay(&attributes).to_string(),
            "{interests=[cats, dogs], tier=[gold]}"
        );
        assert_eq!(MapDisplay(&metrics).to_string(), "{visits=3.5, whole=4.0}");
        assert_eq!(Float(-2.0).to_string(), "-2.0");
    }
}
