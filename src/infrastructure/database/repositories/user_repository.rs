use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set, Unchanged,
};

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};
use crate::infrastructure::database::entities::nome_usuario;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: nome_usuario::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        phone_number: model.phone_number,
        birth_date: model.birth_date,
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list_all(&self) -> DomainResult<Vec<User>> {
        let models = nome_usuario::Entity::find()
            .order_by_asc(nome_usuario::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = nome_usuario::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn add(&self, user: NewUser) -> DomainResult<User> {
        let active = nome_usuario::ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            phone_number: Set(user.phone_number),
            birth_date: Set(user.birth_date),
        };

        let model = active.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let id = user.id;
        let active = nome_usuario::ActiveModel {
            id: Unchanged(id),
            name: Set(user.name),
            email: Set(user.email),
            phone_number: Set(user.phone_number),
            birth_date: Set(user.birth_date),
        };

        match active.update(&self.db).await {
            Ok(model) => Ok(model_to_domain(model)),
            // Row deleted between the caller's existence check and this write
            Err(DbErr::RecordNotUpdated) => Err(DomainError::user_not_found(id)),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = nome_usuario::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(id));
        }

        Ok(())
    }
}
