use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub objekt_id: i32,
    pub copies: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::objekt::Entity",
        from = "Column::ObjektId",
        to = "super::objekt::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Objekt,
}

impl Related<super::objekt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Objekt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
