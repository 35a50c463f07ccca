//! Explicit table descriptions used to bootstrap the database.

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub constraints: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Renders an idempotent `CREATE TABLE IF NOT EXISTS` statement.
    pub fn create_table_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                if c.constraints.is_empty() {
                    format!("{} {}", c.name, c.sql_type)
                } else {
                    format!("{} {} {}", c.name, c.sql_type, c.constraints)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("CREATE TABLE IF NOT EXISTS {} ({})", self.name, columns)
    }
}

pub const PRODUCTS: TableSchema = TableSchema {
    name: "products",
    columns: &[
        Column { name: "id", sql_type: "INTEGER", constraints: "PRIMARY KEY AUTOINCREMENT" },
        Column { name: "name", sql_type: "VARCHAR(100)", constraints: "NOT NULL UNIQUE" },
        Column { name: "description", sql_type: "VARCHAR(200)", constraints: "NOT NULL" },
        Column { name: "price", sql_type: "REAL", constraints: "NOT NULL" },
        Column { name: "qty", sql_type: "INTEGER", constraints: "NOT NULL" },
    ],
};
