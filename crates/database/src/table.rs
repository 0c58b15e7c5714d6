use uuid::Uuid;

/// Borrowed view of a record field, as seen by a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    List(&'a [String]),
}

pub trait Record: Clone {
    /// Payload accepted by [`Table::create`]; the table supplies the id.
    type Draft;

    fn id(&self) -> &str;

    fn field(&self, key: &str) -> Option<FieldRef<'_>>;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    fn set_id(&mut self, id: &str);
}

#[derive(Debug, Clone, Copy)]
pub enum Filter<'a> {
    /// Text field equal to `value`.
    Equals { key: &'a str, value: &'a str },
    /// List field containing `value`.
    InArray { key: &'a str, value: &'a str },
}

impl<'a> Filter<'a> {
    pub fn equals(key: &'a str, value: &'a str) -> Self {
        Filter::Equals { key, value }
    }

    pub fn in_array(key: &'a str, value: &'a str) -> Self {
        Filter::InArray { key, value }
    }

    pub fn matches<E: Record>(&self, record: &E) -> bool {
        match *self {
            Filter::Equals { key, value } => {
                matches!(record.field(key), Some(FieldRef::Text(text)) if text == value)
            }
            Filter::InArray { key, value } => {
                matches!(record.field(key), Some(FieldRef::List(items)) if items.iter().any(|item| item == value))
            }
        }
    }
}

/// One resource collection. No indexes: every lookup is a scan in insertion order.
#[derive(Debug, Clone)]
pub struct Table<E> {
    rows: Vec<E>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<E: Record> Table<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find_many(&self, filter: Option<&Filter<'_>>) -> Vec<E> {
        match filter {
            Some(filter) => self.rows.iter().filter(|row| filter.matches(*row)).cloned().collect(),
            None => self.rows.clone(),
        }
    }

    pub fn find_one(&self, filter: &Filter<'_>) -> Option<E> {
        self.rows.iter().find(|row| filter.matches(*row)).cloned()
    }

    pub fn create(&mut self, draft: E::Draft) -> E {
        let record = E::from_draft(Uuid::new_v4().to_string(), draft);
        self.rows.push(record.clone());
        record
    }

    /// Stores a record under its own id, replacing any row that already uses it.
    pub fn insert(&mut self, record: E) -> E {
        match self.position(record.id()) {
            Some(index) => self.rows[index] = record.clone(),
            None => self.rows.push(record.clone()),
        }
        record
    }

    /// Replaces the row with `id`. The stored id always wins over the one in `record`.
    pub fn change(&mut self, id: &str, mut record: E) -> Option<E> {
        let index = self.position(id)?;
        record.set_id(id);
        self.rows[index] = record.clone();
        Some(record)
    }

    pub fn delete(&mut self, id: &str) -> Option<E> {
        let index = self.position(id)?;
        Some(self.rows.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}
