//! The records stored in a [`Tree`](crate::Tree).

use std::cmp::Ordering;
use std::fmt;

/// An employee: an integer id and a display name.
///
/// Records are ordered, and compared for equality, by `id` alone. The name
/// only shows up when the record is rendered.
///
/// # Examples
///
/// ```
/// use employee_bst::Record;
///
/// let ana = Record::new(5, "Ana");
/// let bob = Record::new(3, "Bob");
///
/// assert!(bob < ana);
/// assert_eq!(ana, Record::new(5, "Someone else"));
/// assert_eq!(ana.to_string(), "Empleado ID: 5, Nombre: Ana");
/// ```
#[derive(Clone, Debug)]
pub struct Record {
    id: i64,
    name: String,
}

impl Record {
    /// Builds a new record. Any id and name are accepted; uniqueness is up to the tree.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The key this record is sorted by.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Empleado ID: {}, Nombre: {}", self.id, self.name)
    }
}
