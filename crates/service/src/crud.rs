//! CRUD operations written once over the [`Resource`] trait.
//!
//! Every write opens a transaction, runs the resource's validation inside it,
//! performs the write and commits. Dropping the transaction on an error path
//! rolls it back.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, FromQueryResult, IdenStatic, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

/// One entity exposed through the generic CRUD surface.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: IntoActiveModel<Self::ActiveModel> + FromQueryResult + Serialize + Clone + Send + Sync + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    /// Complete field mapping accepted by create and replace.
    type Input: DeserializeOwned + Send + Sync + 'static;

    /// Human readable name used in messages and logs.
    const NAME: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn id_of(model: &Self::Model) -> i32;

    /// Field formats, foreign keys and uniqueness. `current` is the id being
    /// replaced, excluded from uniqueness checks.
    async fn validate(
        txn: &DatabaseTransaction,
        input: &Self::Input,
        current: Option<i32>,
    ) -> Result<(), ServiceError>;

    fn into_active_model(input: Self::Input) -> Self::ActiveModel;

    /// Runs inside the delete transaction before the row is removed.
    async fn before_delete(_txn: &DatabaseTransaction, _id: i32) -> Result<(), ServiceError> {
        Ok(())
    }
}

pub async fn count<R: Resource, C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    Ok(R::Entity::find().count(db).await?)
}

#[instrument(skip(db), fields(resource = R::NAME))]
pub async fn list<R: Resource>(db: &DatabaseConnection, opts: Pagination) -> Result<Page<R::Model>, ServiceError> {
    let (offset, limit) = opts.normalize();
    let count = count::<R, _>(db).await?;
    let results = R::Entity::find()
        .order_by_asc(R::id_column())
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;
    Ok(Page { count, results })
}

pub async fn get<R: Resource, C: ConnectionTrait>(db: &C, id: i32) -> Result<R::Model, ServiceError> {
    R::Entity::find()
        .filter(R::id_column().eq(id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(R::NAME, id))
}

#[instrument(skip(db, input), fields(resource = R::NAME))]
pub async fn create<R: Resource>(db: &DatabaseConnection, input: R::Input) -> Result<R::Model, ServiceError> {
    let txn = db.begin().await?;
    R::validate(&txn, &input, None).await?;
    let created = R::into_active_model(input).insert(&txn).await?;
    txn.commit().await?;
    info!(id = R::id_of(&created), "{} created", R::NAME);
    Ok(created)
}

/// Overwrite every non-identity field of an existing row.
#[instrument(skip(db, input), fields(resource = R::NAME))]
pub async fn replace<R: Resource>(db: &DatabaseConnection, id: i32, input: R::Input) -> Result<R::Model, ServiceError> {
    let txn = db.begin().await?;
    get::<R, _>(&txn, id).await?;
    R::validate(&txn, &input, Some(id)).await?;
    let mut am = R::into_active_model(input);
    am.set(R::id_column(), id.into());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    info!(id, "{} updated", R::NAME);
    Ok(updated)
}

#[instrument(skip(db), fields(resource = R::NAME))]
pub async fn delete<R: Resource>(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    get::<R, _>(&txn, id).await?;
    R::before_delete(&txn, id).await?;
    R::Entity::delete_many()
        .filter(R::id_column().eq(id))
        .exec(&txn)
        .await?;
    txn.commit().await?;
    info!(id, "{} deleted", R::NAME);
    Ok(())
}

/// Reject `value` if another row already holds it in `column`.
pub(crate) async fn ensure_unique<E, C>(
    db: &C,
    column: E::Column,
    id_column: E::Column,
    value: &str,
    current: Option<i32>,
    entity: &str,
) -> Result<(), ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut query = E::find().filter(column.eq(value));
    if let Some(id) = current {
        query = query.filter(id_column.ne(id));
    }
    if query.one(db).await?.is_some() {
        let field = column.as_str();
        return Err(ServiceError::Validation(format!("{field}: {entity} with this {field} already exists")));
    }
    Ok(())
}

/// Foreign key check; a dangling reference is a client error.
pub(crate) async fn ensure_exists<E, C>(db: &C, id_column: E::Column, id: i32, field: &str) -> Result<(), ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if E::find().filter(id_column.eq(id)).one(db).await?.is_none() {
        return Err(ServiceError::Validation(format!("{field}: invalid pk \"{id}\" - object does not exist")));
    }
    Ok(())
}
