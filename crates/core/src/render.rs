//! Debug rendering of records.
//!
//! A record renders as `{Name: value,Name: value}`: brace-delimited, comma-joined,
//! wire names, present fields only, declaration order. Sequences render as
//! `[a, b]` and nested records recurse.

use core::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// How a field value is written inside a record rendering.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl Render for str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! render_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(bool, i32, i64, u32, u64);

impl Render for DateTime<Utc> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}

/// Writer for one record, in the spirit of [`fmt::DebugStruct`].
///
/// ```ignore
/// render::shape(f)
///     .field("ImageIds", self.image_ids.as_ref())
///     .field("DryRun", self.dry_run.as_ref())
///     .finish()
/// ```
#[must_use = "must eventually call `finish()`"]
pub struct ShapeWriter<'a, 'b: 'a> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

/// Start rendering a record into `f`.
pub fn shape<'a, 'b>(f: &'a mut fmt::Formatter<'b>) -> ShapeWriter<'a, 'b> {
    let result = f.write_str("{");
    ShapeWriter {
        f,
        result,
        has_fields: false,
    }
}

impl<'a, 'b: 'a> ShapeWriter<'a, 'b> {
    /// Write `name: value` when the field is present; skip it otherwise.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: Render + ?Sized,
    {
        let Some(value) = value else {
            return self;
        };

        self.result = self.result.and_then(|_| {
            if self.has_fields {
                self.f.write_str(",")?;
            }
            self.f.write_str(name)?;
            self.f.write_str(": ")?;
            value.render(self.f)
        });
        self.has_fields = true;
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.f.write_str("}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Sample {
        name: Option<String>,
        ids: Option<Vec<String>>,
        count: Option<i32>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            shape(f)
                .field("Name", self.name.as_ref())
                .field("Ids", self.ids.as_ref())
                .field("Count", self.count.as_ref())
                .finish()
        }
    }

    #[test]
    fn renders_present_fields_in_order() {
        let s = Sample {
            name: Some("web".into()),
            ids: Some(vec!["a".into(), "b".into()]),
            count: Some(3),
        };
        assert_eq!(s.to_string(), "{Name: web,Ids: [a, b],Count: 3}");
    }

    #[test]
    fn absent_fields_are_skipped_without_stray_separators() {
        let s = Sample {
            name: None,
            ids: None,
            count: Some(1),
        };
        assert_eq!(s.to_string(), "{Count: 1}");

        let s = Sample {
            name: None,
            ids: None,
            count: None,
        };
        assert_eq!(s.to_string(), "{}");
    }

    #[test]
    fn empty_values_are_rendered() {
        let s = Sample {
            name: Some(String::new()),
            ids: Some(Vec::new()),
            count: None,
        };
        assert_eq!(s.to_string(), "{Name: ,Ids: []}");
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        struct At(DateTime<Utc>);
        impl fmt::Display for At {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.render(f)
            }
        }

        let t = Utc.with_ymd_and_hms(2020, 5, 17, 8, 30, 0).unwrap();
        assert_eq!(At(t).to_string(), "2020-05-17T08:30:00.000Z");
    }
}
