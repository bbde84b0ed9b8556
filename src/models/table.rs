use super::trip::TripRecord;

/// Optional columns. Presence is decided per table, never per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub gender: bool,
    pub birth_year: bool,
}

impl Schema {
    pub fn full() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }
}

/// Ordered trip records of one city load, sharing one schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    schema: Schema,
    records: Vec<TripRecord>,
}

impl TripTable {
    /// Columns missing from `schema` are cleared on every record.
    pub fn new(schema: Schema, mut records: Vec<TripRecord>) -> Self {
        for r in records.iter_mut() {
            if !schema.gender {
                r.gender = None;
            }
            if !schema.birth_year {
                r.birth_year = None;
            }
        }
        Self { schema, records }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New table with the records matching `keep`, order preserved.
    pub fn retain_matching<F>(&self, mut keep: F) -> TripTable
    where
        F: FnMut(&TripRecord) -> bool,
    {
        TripTable {
            schema: self.schema,
            records: self.records.iter().filter(|&r| keep(r)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
