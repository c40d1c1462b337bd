use diesel::prelude::*;

use crate::domain::product_tag::{NewProductTag, ProductTag as DomainProductTag};
use crate::domain::tag::{NewTag, Tag as DomainTag};
use crate::models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductTagReader, ProductTagWriter};

impl ProductTagReader for DieselRepository {
    fn list_tags_for_product(&self, product_id: i32) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::{product_tags, tags};

        let mut conn = self.conn()?;

        // Ordered by association id so the visible tag list keeps the order
        // the tags were attached in.
        let db_tags = product_tags::table
            .inner_join(tags::table)
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .select(DbTag::as_select())
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }

    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        let mut conn = self.conn()?;

        let rows = product_tags::table
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .load::<DbProductTag>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductTag::from).collect())
    }
}

impl ProductTagWriter for DieselRepository {
    fn replace_product_tags(
        &self,
        product_id: i32,
        tag_names: &[String],
        clear_existing: bool,
    ) -> RepositoryResult<()> {
        use crate::schema::{product_tags, tags};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let current = product_tags::table
                .filter(product_tags::product_id.eq(product_id))
                .load::<DbProductTag>(conn)?;

            if clear_existing {
                let current_ids: Vec<i32> = current.iter().map(|row| row.id).collect();
                diesel::delete(product_tags::table.filter(product_tags::id.eq_any(current_ids)))
                    .execute(conn)?;
            }

            for name in tag_names {
                let existing = tags::table
                    .filter(tags::name.eq(name))
                    .first::<DbTag>(conn)
                    .optional()?;

                let tag = match existing {
                    Some(tag) => tag,
                    None => {
                        let new_tag = NewTag::new(name.as_str());
                        diesel::insert_into(tags::table)
                            .values(&DbNewTag::from(&new_tag))
                            .get_result::<DbTag>(conn)?
                    }
                };

                let association = NewProductTag::new(product_id, tag.id);
                diesel::insert_into(product_tags::table)
                    .values(&DbNewProductTag::from(&association))
                    .execute(conn)?;
            }

            Ok(())
        })
    }
}
