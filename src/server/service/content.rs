//! Static content service.
//!
//! Content items are authored in markdown through the back office and served
//! rendered to HTML.

use pulldown_cmark::{html, Parser};
use sea_orm::DatabaseConnection;

use crate::{
    model::content::{
        AdminContentDto, ContentDto, ContentListItemDto, CreateContentDto, UpdateContentDto,
    },
    server::{data::content::ContentRepository, error::AppError},
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists published items, optionally by category.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<ContentListItemDto>, AppError> {
        let items = ContentRepository::new(self.db)
            .list_published(category)
            .await?;

        Ok(items
            .into_iter()
            .map(|item| ContentListItemDto {
                slug: item.slug,
                title: item.title,
                category: item.category,
                updated_at: item.updated_at,
            })
            .collect())
    }

    /// Gets a published item with its body rendered to HTML.
    pub async fn get(&self, slug: &str) -> Result<ContentDto, AppError> {
        let item = ContentRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|item| item.published)
            .ok_or_else(content_not_found)?;

        Ok(ContentDto {
            slug: item.slug,
            title: item.title,
            category: item.category,
            html: render_markdown(&item.body),
            updated_at: item.updated_at,
        })
    }

    pub async fn admin_list(&self) -> Result<Vec<AdminContentDto>, AppError> {
        let items = ContentRepository::new(self.db).list_all().await?;

        Ok(items.into_iter().map(admin_content_to_dto).collect())
    }

    pub async fn create(&self, dto: CreateContentDto) -> Result<AdminContentDto, AppError> {
        let repo = ContentRepository::new(self.db);

        if repo.find_by_slug(&dto.slug).await?.is_some() {
            return Err(AppError::Conflict(
                "이미 사용 중인 슬러그입니다.".to_string(),
            ));
        }

        let item = repo
            .create(dto.slug, dto.title, dto.body, dto.category, dto.published)
            .await?;

        Ok(admin_content_to_dto(item))
    }

    pub async fn update(
        &self,
        slug: &str,
        dto: UpdateContentDto,
    ) -> Result<AdminContentDto, AppError> {
        let repo = ContentRepository::new(self.db);

        let item = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(content_not_found)?;

        let updated = repo
            .update(item, dto.title, dto.body, dto.category, dto.published)
            .await?;

        Ok(admin_content_to_dto(updated))
    }

    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        let repo = ContentRepository::new(self.db);

        let item = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(content_not_found)?;

        repo.delete(item.id).await?;

        Ok(())
    }
}

fn content_not_found() -> AppError {
    AppError::NotFound("콘텐츠를 찾을 수 없습니다.".to_string())
}

fn admin_content_to_dto(item: entity::content_item::Model) -> AdminContentDto {
    AdminContentDto {
        id: item.id,
        slug: item.slug,
        title: item.title,
        body: item.body,
        category: item.category,
        published: item.published,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

/// Renders a markdown body to HTML.
pub(crate) fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::new();
    html::push_html(&mut html, parser);

    html
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_markdown("# 마음 돌보기\n\n호흡에 집중해 보세요.");

        assert!(html.contains("<h1>마음 돌보기</h1>"));
        assert!(html.contains("<p>호흡에 집중해 보세요.</p>"));
    }

    #[test]
    fn renders_lists() {
        let html = render_markdown("- 산책\n- 일기 쓰기");

        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>산책</li>"));
    }
}
