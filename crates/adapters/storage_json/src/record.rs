//! The persisted record layout and its strict conversion to domain types.
//!
//! The on-disk form keeps the legacy dataset shape: a `locado` flag
//! next to flat optional lease fields. Parsing refuses records where the
//! flag and the fields disagree instead of silently dropping data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rentalhub_domain::id::UnitId;
use rentalhub_domain::lease::{ActiveLease, HistoricalLease};
use rentalhub_domain::unit::Unit;

use crate::error::StorageError;

/// One unit as stored in the dataset file.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UnitRecord {
    unidade: UnitId,
    apartamento: String,
    proprietario: String,
    locado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    locatario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inicio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fim: Option<NaiveDate>,
    #[serde(default)]
    historico_locacoes: Vec<HistoricalLease>,
}

impl From<Unit> for UnitRecord {
    fn from(unit: Unit) -> Self {
        let (locado, locatario, inicio, fim) = match unit.lease {
            Some(lease) => (true, Some(lease.tenant), Some(lease.start), lease.end),
            None => (false, None, None, None),
        };
        Self {
            unidade: unit.id,
            apartamento: unit.label,
            proprietario: unit.owner,
            locado,
            locatario,
            inicio,
            fim,
            historico_locacoes: unit.history,
        }
    }
}

impl TryFrom<UnitRecord> for Unit {
    type Error = StorageError;

    fn try_from(record: UnitRecord) -> Result<Self, Self::Error> {
        let lease = match (record.locado, record.locatario, record.inicio) {
            (true, Some(tenant), Some(start)) => Some(ActiveLease {
                tenant,
                start,
                end: record.fim,
            }),
            (true, _, _) => {
                return Err(StorageError::Schema {
                    unit: record.unidade.to_string(),
                    reason: "marked leased without tenant and start date",
                });
            }
            (false, None, None) if record.fim.is_none() => None,
            (false, _, _) => {
                return Err(StorageError::Schema {
                    unit: record.unidade.to_string(),
                    reason: "lease fields present on a vacant unit",
                });
            }
        };
        Ok(Unit {
            id: record.unidade,
            label: record.apartamento,
            owner: record.proprietario,
            lease,
            history: record.historico_locacoes,
        })
    }
}
