//! Concept descriptors: the symbolic side of the catalog.
//!
//! A [`Concept`] is an immutable record naming a mathematical idea
//! ("Square Wave", "Lissajous Curve", ...) together with its category and
//! display strings. The waveform sub-kind is resolved from the name exactly
//! once, at construction, into a [`SeriesKind`] discriminant so that the
//! model builder dispatches over a closed sum type instead of repeating
//! substring tests at every call.

use std::fmt;

/// Top-level grouping of concepts, mirroring the catalog's JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    FourierSeries,
    ParametricCurves,
    TaylorSeries,
    /// User-supplied equation concepts; never present in the static catalog.
    Custom,
    /// A catalog key this crate has no generators for. Kept (not rejected)
    /// so an extended catalog still loads and lists; builds fall back.
    Other(String),
}

impl Category {
    /// Category for a raw catalog key, e.g. `"FourierSeries"`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "FourierSeries" => Category::FourierSeries,
            "ParametricCurves" => Category::ParametricCurves,
            "TaylorSeries" => Category::TaylorSeries,
            "Custom" => Category::Custom,
            other => Category::Other(other.to_string()),
        }
    }

    /// The raw catalog key for this category.
    pub fn key(&self) -> &str {
        match self {
            Category::FourierSeries => "FourierSeries",
            Category::ParametricCurves => "ParametricCurves",
            Category::TaylorSeries => "TaylorSeries",
            Category::Custom => "Custom",
            Category::Other(key) => key,
        }
    }

    /// Human-readable category name used in dropdown entries:
    /// `"Series"` → `" Series"` and `"Curves"` → `" Curves"`, so
    /// `FourierSeries` displays as `Fourier Series`. Display only; the raw
    /// key stays authoritative for the data model.
    pub fn display_name(&self) -> String {
        self.key().replace("Series", " Series").replace("Curves", " Curves")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// The closed set of waveform/curve sub-kinds this crate has generators for.
///
/// Resolved once from the concept name (case-sensitive containment, fixed
/// keyword order) within the concept's category. A concept whose name
/// matches no keyword carries no kind and builds to its category's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    SquareWave,
    SawtoothWave,
    TriangleWave,
    Lissajous,
    Epicycloid,
    TaylorExponential,
    TaylorCosine,
    TaylorSine,
    /// The concept's `equation` field is a user expression for the
    /// pattern-extraction interpreter.
    CustomEquation,
}

impl SeriesKind {
    /// Resolve a concept name within its category.
    ///
    /// Keywords are checked in a fixed order per category, which makes the
    /// resolution insensitive to any future keyword that happens to contain
    /// another ("Cosine" is tested before "Sine" for exactly that reason).
    pub fn resolve(category: &Category, name: &str) -> Option<SeriesKind> {
        match category {
            Category::FourierSeries => {
                if name.contains("Square") {
                    Some(SeriesKind::SquareWave)
                } else if name.contains("Sawtooth") {
                    Some(SeriesKind::SawtoothWave)
                } else if name.contains("Triangle") {
                    Some(SeriesKind::TriangleWave)
                } else {
                    None
                }
            },
            Category::ParametricCurves => {
                if name.contains("Lissajous") {
                    Some(SeriesKind::Lissajous)
                } else if name.contains("Epicycloid") {
                    Some(SeriesKind::Epicycloid)
                } else {
                    None
                }
            },
            Category::TaylorSeries => {
                if name.contains("Exponential") {
                    Some(SeriesKind::TaylorExponential)
                } else if name.contains("Cosine") {
                    Some(SeriesKind::TaylorCosine)
                } else if name.contains("Sine") {
                    Some(SeriesKind::TaylorSine)
                } else {
                    None
                }
            },
            Category::Custom => Some(SeriesKind::CustomEquation),
            Category::Other(_) => None,
        }
    }
}

/// A named mathematical concept, immutable once constructed.
///
/// Identity is the name; the catalog assumes names are unique and lookup
/// takes the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub name: String,
    pub category: Category,
    /// Display equation, or the raw user expression for custom concepts.
    pub equation: String,
    /// Short descriptive text for the visualization.
    pub visual: String,
    /// Sub-kind resolved from `name` at construction; `None` means this
    /// concept builds to its category's fallback shape.
    pub kind: Option<SeriesKind>,
}

impl Concept {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        equation: impl Into<String>,
        visual: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let kind = SeriesKind::resolve(&category, &name);
        Concept {
            name,
            category,
            equation: equation.into(),
            visual: visual.into(),
            kind,
        }
    }

    /// A user-typed custom-equation concept. The expression lands in
    /// `equation` and feeds the pattern-extraction interpreter at build
    /// time.
    pub fn custom(name: impl Into<String>, expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let visual = format!("Custom visualization: {}", expression);
        Concept::new(name, Category::Custom, expression, visual)
    }

    /// Dropdown entry for this concept: `"{category} - {name}"`.
    pub fn display_entry(&self) -> String {
        format!("{} - {}", self.category.display_name(), self.name)
    }
}
