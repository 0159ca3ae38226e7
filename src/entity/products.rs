use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_products::Entity")]
    CartProducts,
}

impl Related<super::cart_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartProducts.def()
    }
}

impl Related<super::carts::Entity> for Entity {
    fn to() -> RelationDef {
        super::cart_products::Relation::Carts.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cart_products::Relation::Products.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
