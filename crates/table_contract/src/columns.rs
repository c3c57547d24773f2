//! Column descriptors and per-row cell rendering.

use std::rc::Rc;

use serde_json::Value;

use crate::error::TableContractError;
use crate::sorting::SortState;

/// Reads the raw field value a column displays and sorts by.
pub type FieldAccessor<T> = Rc<dyn Fn(&T) -> Value>;

/// Custom cell renderer producing renderer-specific output `V`.
pub type CellRenderer<T, V> = Rc<dyn Fn(&T) -> V>;

/// One column of a table: header, accessor, and optional custom renderer.
pub struct ColumnDescriptor<T, V> {
    /// Stable column id; also the field key used by [`SortState::field`].
    pub id: String,
    /// Header label.
    pub header: String,
    /// Raw field accessor.
    pub accessor: FieldAccessor<T>,
    /// Custom renderer; takes precedence over the stringified field value.
    pub render: Option<CellRenderer<T, V>>,
    /// Width hint forwarded to the header cell (e.g. `"8rem"`).
    pub width: Option<String>,
    /// Extra class tokens applied to the header and body cells.
    pub class_name: Option<String>,
    /// Whether header clicks request sorting by this column.
    pub sortable: bool,
}

impl<T, V> Clone for ColumnDescriptor<T, V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Rc::clone(&self.accessor),
            render: self.render.clone(),
            width: self.width.clone(),
            class_name: self.class_name.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T, V> ColumnDescriptor<T, V> {
    /// Creates a non-sortable column reading its value through `accessor`.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> Value + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Rc::new(accessor),
            render: None,
            width: None,
            class_name: None,
            sortable: false,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets a custom cell renderer.
    pub fn render_with(mut self, render: impl Fn(&T) -> V + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Sets the width hint.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets extra cell class tokens.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Produces the cell for `row`.
    pub fn cell(&self, row: &T) -> Cell<V> {
        match self.render.as_ref() {
            Some(render) => Cell::Custom(render(row)),
            None => Cell::Text(stringify_value(&(self.accessor)(row))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Rendered content of one body cell.
pub enum Cell<V> {
    /// Stringified raw field value.
    Text(String),
    /// Output of the column's custom renderer.
    Custom(V),
}

/// Ordered id → descriptor mapping; insertion order is display order.
pub struct ColumnSet<T, V> {
    columns: Vec<ColumnDescriptor<T, V>>,
}

impl<T, V> Clone for ColumnSet<T, V> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T, V> Default for ColumnSet<T, V> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<T, V> ColumnSet<T, V> {
    /// Creates an empty column set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from descriptors, rejecting duplicate ids.
    pub fn from_columns(
        columns: impl IntoIterator<Item = ColumnDescriptor<T, V>>,
    ) -> Result<Self, TableContractError> {
        let mut set = Self::new();
        for column in columns {
            set.push(column)?;
        }
        Ok(set)
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Returns [`TableContractError::DuplicateColumnId`] when the id is taken.
    pub fn push(&mut self, column: ColumnDescriptor<T, V>) -> Result<(), TableContractError> {
        if self.get(&column.id).is_some() {
            return Err(TableContractError::DuplicateColumnId(column.id));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Looks up a column by id.
    pub fn get(&self, id: &str) -> Option<&ColumnDescriptor<T, V>> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Iterates columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor<T, V>> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks that `sort` names an existing, sortable column.
    pub fn validate_sort(&self, sort: &SortState) -> Result<(), TableContractError> {
        match self.get(&sort.field) {
            None => Err(TableContractError::UnknownSortField(sort.field.clone())),
            Some(column) if !column.sortable => {
                Err(TableContractError::NotSortable(sort.field.clone()))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Produces one cell per column for `row`, in display order.
pub fn render_row_cells<T, V>(columns: &ColumnSet<T, V>, row: &T) -> Vec<Cell<V>> {
    columns.iter().map(|column| column.cell(row)).collect()
}

/// Stringifies a raw field value for display. `null` renders empty.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    struct User {
        name: String,
        age: Option<u32>,
        tags: Vec<&'static str>,
    }

    fn user() -> User {
        User {
            name: "Ada".to_string(),
            age: None,
            tags: vec!["admin", "ops"],
        }
    }

    fn columns() -> ColumnSet<User, String> {
        ColumnSet::from_columns([
            ColumnDescriptor::new("name", "Name", |u: &User| json!(u.name)).sortable(),
            ColumnDescriptor::new("age", "Age", |u: &User| json!(u.age)),
            ColumnDescriptor::new("tags", "Tags", |u: &User| json!(u.tags))
                .render_with(|u: &User| u.tags.join(" / ")),
        ])
        .expect("columns")
    }

    #[test]
    fn renders_one_cell_per_column_in_display_order() {
        let cells = render_row_cells(&columns(), &user());
        assert_eq!(
            cells,
            vec![
                Cell::Text("Ada".to_string()),
                Cell::Text(String::new()),
                Cell::Custom("admin / ops".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_column_ids_are_rejected() {
        let result = ColumnSet::<User, String>::from_columns([
            ColumnDescriptor::new("name", "Name", |u: &User| json!(u.name)),
            ColumnDescriptor::new("name", "Again", |u: &User| json!(u.name)),
        ]);
        assert_eq!(
            result.err(),
            Some(TableContractError::DuplicateColumnId("name".to_string()))
        );
    }

    #[test]
    fn sort_validation_requires_existing_sortable_column() {
        let set = columns();
        assert!(set.validate_sort(&SortState::asc("name")).is_ok());
        assert_eq!(
            set.validate_sort(&SortState::asc("age")),
            Err(TableContractError::NotSortable("age".to_string()))
        );
        assert_eq!(
            set.validate_sort(&SortState::asc("email")),
            Err(TableContractError::UnknownSortField("email".to_string()))
        );
    }

    #[test]
    fn stringify_covers_each_value_kind() {
        assert_eq!(stringify_value(&json!(null)), "");
        assert_eq!(stringify_value(&json!(3)), "3");
        assert_eq!(stringify_value(&json!(false)), "false");
        assert_eq!(stringify_value(&json!([1, 2])), "[1,2]");
        assert_eq!(stringify_value(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
