//! Generic boolean-flag toggle.
//!
//! Pinned, featured, show-on-home, approval, read and active flags all flip the
//! same way: load the record, invert one boolean column, write it back. One
//! generic helper serves every toggle endpoint instead of a per-entity copy.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, Iterable, ModelTrait, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter, Value,
};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::error::RepoError;

/// What a toggle endpoint reports back: the record and the flag's new state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    pub id: Uuid,
    pub enabled: bool,
}

/// Flips `column` on the record with primary key `id` and returns the new
/// value. `NotFound` when no such record exists.
pub async fn toggle_flag<E, C>(db: &C, id: Uuid, column: E::Column) -> Result<bool, RepoError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let model = E::find_by_id(<E::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id))
        .one(db)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?
        .ok_or(RepoError::NotFound)?;

    let current = match model.get(column) {
        Value::Bool(Some(b)) => b,
        other => {
            return Err(RepoError::Database(format!(
                "toggle target is not a boolean column: {:?}",
                other
            )))
        }
    };
    let next = !current;

    let pk_column = E::PrimaryKey::iter()
        .next()
        .expect("entity without primary key")
        .into_column();

    E::update_many()
        .col_expr(column, Expr::value(next))
        .filter(pk_column.eq(id))
        .exec(db)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

    Ok(next)
}
