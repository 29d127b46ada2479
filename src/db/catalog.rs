//! Startup reflection of the three partitions.
//!
//! The catalog describes which tables exist in each partition and what
//! columns they carry, read once from `information_schema` under the
//! login user before any scoped call runs. A partition missing a
//! required table is fatal; the process must not come up half-sighted.
//! After reflection the catalog is read-only.

use std::collections::BTreeMap;

use postgres::Client;
use serde::Serialize;

use super::scope::Schema;
use super::session::ConnectionFactory;
use super::DatabaseError;

/// Tables each partition must expose. The per-role grants in the DDL
/// mirror these sets; reflection verifies storage actually has them.
const DOCTOR_TABLES: &[&str] = &["patients", "medical_records", "medications"];
const PATIENT_TABLES: &[&str] = &["patients", "medical_records"];
const ADMIN_TABLES: &[&str] = &[
    "patients",
    "hospitals",
    "doctors",
    "medications",
    "insurance_providers",
    "medical_records",
];

// information_schema exposes domain types (sql_identifier,
// cardinal_number); cast to what the driver reads directly.
const REFLECT_SQL: &str = "SELECT table_name::text, column_name::text, data_type::text,
            is_nullable::text, ordinal_position::int
     FROM information_schema.columns
     WHERE table_schema = $1
     ORDER BY table_name, ordinal_position";

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableDef {
    pub name: String,
    /// In ordinal order, as storage defines them.
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// One partition's reflected tables.
#[derive(Debug)]
pub struct PartitionCatalog {
    schema: Schema,
    tables: BTreeMap<String, TableDef>,
}

impl PartitionCatalog {
    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.values()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// All three partitions. Built once at startup, then only read.
#[derive(Debug)]
pub struct SchemaCatalog {
    doctor: PartitionCatalog,
    patient: PartitionCatalog,
    admin: PartitionCatalog,
}

impl SchemaCatalog {
    /// Reflect every partition over one connection, one query each.
    pub fn reflect(factory: &ConnectionFactory) -> Result<Self, DatabaseError> {
        let mut client = factory.connect()?;
        let doctor = reflect_partition(&mut client, Schema::Doctor, DOCTOR_TABLES)?;
        let patient = reflect_partition(&mut client, Schema::Patient, PATIENT_TABLES)?;
        let admin = reflect_partition(&mut client, Schema::Admin, ADMIN_TABLES)?;
        Ok(Self {
            doctor,
            patient,
            admin,
        })
    }

    pub fn partition(&self, schema: Schema) -> &PartitionCatalog {
        match schema {
            Schema::Doctor => &self.doctor,
            Schema::Patient => &self.patient,
            Schema::Admin => &self.admin,
        }
    }

    /// Catalog with no reflected tables, for router tests that never
    /// reach storage.
    #[cfg(test)]
    pub(crate) fn empty_for_tests() -> Self {
        let empty = |schema| PartitionCatalog {
            schema,
            tables: BTreeMap::new(),
        };
        Self {
            doctor: empty(Schema::Doctor),
            patient: empty(Schema::Patient),
            admin: empty(Schema::Admin),
        }
    }
}

fn reflect_partition(
    client: &mut Client,
    schema: Schema,
    required: &[&str],
) -> Result<PartitionCatalog, DatabaseError> {
    let rows = client.query(REFLECT_SQL, &[&schema.as_str()])?;

    let mut tables: BTreeMap<String, TableDef> = BTreeMap::new();
    for row in rows {
        let table: String = row.try_get("table_name")?;
        let column = ColumnDef {
            name: row.try_get("column_name")?,
            data_type: row.try_get("data_type")?,
            nullable: row.try_get::<_, String>("is_nullable")? == "YES",
            position: row.try_get("ordinal_position")?,
        };
        tables
            .entry(table.clone())
            .or_insert_with(|| TableDef {
                name: table,
                columns: Vec::new(),
            })
            .columns
            .push(column);
    }

    for name in required {
        if !tables.contains_key(*name) {
            return Err(DatabaseError::MissingTable {
                schema: schema.as_str().to_string(),
                table: name.to_string(),
            });
        }
    }

    tracing::info!(
        schema = schema.as_str(),
        tables = tables.len(),
        "partition reflected"
    );
    Ok(PartitionCatalog { schema, tables })
}
