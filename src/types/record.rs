use serde::Serialize;

/// One marks component: maximum obtainable and obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Component {
    pub total: f64,
    pub scored: f64,
}

impl Component {
    pub fn new(total: f64, scored: f64) -> Self {
        Self { total, scored }
    }

    /// `None` when the total is not positive.
    pub fn percentage(&self) -> Option<f64> {
        (self.total > 0.0).then(|| self.scored / self.total * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Marks {
    Simple(Component),
    Components {
        external: Component,
        internal: Component,
    },
}

impl Marks {
    pub fn max_total(&self) -> f64 {
        match self {
            Marks::Simple(marks) => marks.total,
            Marks::Components { external, internal } => external.total + internal.total,
        }
    }

    pub fn scored(&self) -> f64 {
        match self {
            Marks::Simple(marks) => marks.scored,
            Marks::Components { external, internal } => external.scored + internal.scored,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRecord {
    pub name: String,
    pub credit: f64,
    pub marks: Marks,
}

impl SubjectRecord {
    pub fn simple(name: impl Into<String>, credit: f64, total: f64, scored: f64) -> Self {
        Self {
            name: name.into(),
            credit,
            marks: Marks::Simple(Component::new(total, scored)),
        }
    }

    pub fn components(
        name: impl Into<String>,
        credit: f64,
        external: Component,
        internal: Component,
    ) -> Self {
        Self {
            name: name.into(),
            credit,
            marks: Marks::Components { external, internal },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterRecord {
    pub sgpa: f64,
    pub credit: f64,
}

impl SemesterRecord {
    pub fn new(sgpa: f64, credit: f64) -> Self {
        Self { sgpa, credit }
    }
}
