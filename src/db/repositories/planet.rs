use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::db::error::{StoreError, StoreResult};
use crate::entities::{planets, prelude::*};
use crate::models::{Planet, PlanetFields};

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            p_id: model.p_id,
            fields: PlanetFields {
                p_name: model.p_name,
                p_type: model.p_type,
                home_star: model.home_star,
                mass: model.mass,
                radius: model.radius,
                distance: model.distance,
            },
        }
    }
}

fn active_fields(fields: PlanetFields) -> planets::ActiveModel {
    planets::ActiveModel {
        p_id: NotSet,
        p_name: Set(fields.p_name),
        p_type: Set(fields.p_type),
        home_star: Set(fields.home_star),
        mass: Set(fields.mass),
        radius: Set(fields.radius),
        distance: Set(fields.distance),
    }
}

pub struct PlanetRepository {
    conn: DatabaseConnection,
}

impl PlanetRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> StoreResult<Vec<Planet>> {
        let rows = Planets::find()
            .order_by_asc(planets::Column::PId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    pub async fn get(&self, id: i32) -> StoreResult<Planet> {
        Planets::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Planet::from)
            .ok_or(StoreError::NotFound)
    }

    pub async fn count(&self) -> StoreResult<u64> {
        Ok(Planets::find().count(&self.conn).await?)
    }

    pub async fn count_named(&self, name: &str) -> StoreResult<u64> {
        Ok(Planets::find()
            .filter(planets::Column::PName.eq(name))
            .count(&self.conn)
            .await?)
    }

    /// Inserts a planet in a single statement. The UNIQUE constraint on
    /// `p_name` decides between concurrent creates of the same name.
    pub async fn create(&self, fields: PlanetFields) -> StoreResult<Planet> {
        let name = fields.p_name.clone();

        let model = active_fields(fields)
            .insert(&self.conn)
            .await
            .map_err(|e| StoreError::from_write(e, || format!("planet '{name}' already exists")))?;

        Ok(Planet::from(model))
    }

    /// Replaces every mutable field of planet `id`.
    pub async fn update(&self, id: i32, fields: PlanetFields) -> StoreResult<Planet> {
        let name = fields.p_name.clone();

        let result = Planets::update_many()
            .set(active_fields(fields.clone()))
            .filter(planets::Column::PId.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|e| StoreError::from_write(e, || format!("planet '{name}' already exists")))?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(Planet { p_id: id, fields })
    }

    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = Planets::delete_by_id(id).exec(&self.conn).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
