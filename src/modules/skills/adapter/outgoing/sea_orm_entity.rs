use crate::skills::application::ports::{SkillCategoryRecord, SkillRecord};

pub mod category {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "skill_categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: Uuid,

        pub name: String,

        pub description: Option<String>,

        pub color: Option<String>,

        pub position: i32,

        pub created_at: DateTimeWithTimeZone,

        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::skill::Entity")]
        Skill,
    }

    impl Related<super::skill::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Skill.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod skill {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "skills")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: Uuid,

        pub category_id: Uuid,

        pub name: String,

        pub image_url: Option<String>,

        pub created_at: DateTimeWithTimeZone,

        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::category::Entity",
            from = "Column::CategoryId",
            to = "super::category::Column::Id"
        )]
        Category,
    }

    impl Related<super::category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

impl category::Model {
    pub fn to_record(&self) -> SkillCategoryRecord {
        SkillCategoryRecord {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            position: self.position,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

impl skill::Model {
    pub fn to_record(&self) -> SkillRecord {
        SkillRecord {
            id: self.id,
            category_id: self.category_id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
