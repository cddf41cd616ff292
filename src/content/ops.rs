//! Collection operations on [`CmsClient`].

use super::{Article, Gallery, HomeData, Infographics};
use crate::client::CmsClient;
use crate::query::{FilterOp, Query, SortDirection};
use crate::types::{Document, ListResponse};
use crate::Result;
use serde_json::{json, Value};

/// Articles shown per listing page.
pub const ARTICLES_PAGE_SIZE: u32 = 6;
/// Sidebar length for recent-article lists.
pub const RECENT_ARTICLES_LIMIT: u32 = 5;

impl CmsClient {
    /// One page of news articles, newest first, relations populated.
    pub async fn articles(&self, page: u32) -> Result<ListResponse<Article>> {
        let query = Query::new()
            .sort("datePublished", SortDirection::Desc)
            .populate("*")
            .paginate(page, ARTICLES_PAGE_SIZE);
        let body = self.request("/api/beritas", &query.into_value()).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// The article with the given slug, or `None` when nothing matches.
    pub async fn article_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        let query = Query::new().filter("slug", FilterOp::Eq, slug).populate("*");
        let body = self.request("/api/beritas", &query.into_value()).await?;
        let list: ListResponse<Article> = serde_json::from_value(body)?;
        Ok(list.data.into_iter().next())
    }

    /// Sidebar feed: the newest articles except the one being read.
    pub async fn recent_articles(&self, exclude_slug: &str) -> Result<Vec<Article>> {
        let query = Query::new()
            .sort("datePublished", SortDirection::Desc)
            .filter("slug", FilterOp::Ne, exclude_slug)
            .limit(RECENT_ARTICLES_LIMIT)
            .populate("thumbnail");
        let body = self.request("/api/beritas", &query.into_value()).await?;
        let list: ListResponse<Article> = serde_json::from_value(body)?;
        Ok(list.data)
    }

    /// The photo gallery with its photos relation populated.
    pub async fn gallery(&self) -> Result<Gallery> {
        let query = Query::new().populate("photos");
        let body = self.request("/api/gallery", &query.into_value()).await?;
        let document: Document<Gallery> = serde_json::from_value(body)?;
        Ok(document.data)
    }

    /// The village profile document with every relation populated.
    pub async fn profile(&self) -> Result<Value> {
        let query = Query::new().populate("*");
        let body = self.request("/api/profil-desa", &query.into_value()).await?;
        let document: Document<Value> = serde_json::from_value(body)?;
        Ok(document.data)
    }

    /// Everything the home page shows, fetched concurrently.
    pub async fn home(&self) -> Result<HomeData> {
        let profile_query = Query::new().populate("heroImage").into_value();
        let gallery_query = Query::new().populate("*").into_value();
        let (profile_body, gallery_body) = futures::try_join!(
            self.request("/api/profil-desa", &profile_query),
            self.request("/api/gallery", &gallery_query),
        )?;
        let profile: Document<Value> = serde_json::from_value(profile_body)?;
        let gallery: Document<Gallery> = serde_json::from_value(gallery_body)?;
        Ok(HomeData {
            profile: profile.data,
            gallery: gallery.data,
        })
    }

    /// Both demographic infographic documents, fetched concurrently.
    pub async fn infographics(&self) -> Result<Infographics> {
        let empty = json!({});
        let (population_body, education_body) = futures::try_join!(
            self.request("/api/infographic", &empty),
            self.request("/api/infographic2", &empty),
        )?;
        let population: Document<Value> = serde_json::from_value(population_body)?;
        let education: Document<Value> = serde_json::from_value(education_body)?;
        Ok(Infographics {
            population: population.data,
            education: education.data,
        })
    }
}
