use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::config::ApiConfig;
use crate::domain::ItemRef;
use crate::error::KbError;
use crate::gateway::{FetchGateway, HttpFetchGateway};
use crate::normalize::{
    self, CohortCoverage, GeneHit, GeneInfo, PathwayInfo, PolicyProfile, SearchHit, VariantInfo,
};

/// Read-through cached facade over the knowledge-base API.
///
/// Raw operations ([`list_items`](Self::list_items),
/// [`get_item`](Self::get_item), [`search`](Self::search)) propagate
/// [`KbError`] unchanged. The entity accessors are the containment boundary:
/// any failure is logged once as a warning and collapsed to `None` or an
/// empty list, so callers above this layer never handle errors.
pub struct KbClient<G: FetchGateway> {
    base_url: String,
    gateway: G,
    cache: CacheStore,
}

impl KbClient<HttpFetchGateway> {
    /// Production client: endpoint roots from the environment, default TTL.
    pub fn from_env() -> Result<Self, KbError> {
        Ok(Self::new(
            &ApiConfig::from_env(),
            HttpFetchGateway::new()?,
            CacheStore::new(),
        ))
    }
}

impl<G: FetchGateway> KbClient<G> {
    pub fn new(config: &ApiConfig, gateway: G, cache: CacheStore) -> Self {
        Self {
            base_url: config.kb_base(),
            gateway,
            cache,
        }
    }

    /// Cache hit returns without touching the network; a miss fetches,
    /// stores on success and propagates failures uncached.
    fn fetch_with_cache(&self, url: &str, cache_key: &str) -> Result<Value, KbError> {
        if let Some(payload) = self.cache.get(cache_key) {
            debug!(key = cache_key, "cache hit");
            return Ok(payload);
        }
        debug!(key = cache_key, url, "cache miss");
        let payload = self.gateway.get_json(url)?;
        self.cache.set(cache_key, payload.clone());
        Ok(payload)
    }

    pub fn list_items(
        &self,
        item_type: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Value, KbError> {
        let url = format!(
            "{}/items?type={item_type}&limit={limit}&offset={offset}",
            self.base_url
        );
        let cache_key = format!("items_{item_type}_{limit}_{offset}");
        self.fetch_with_cache(&url, &cache_key)
    }

    pub fn get_item(&self, item: &ItemRef) -> Result<Value, KbError> {
        let path = item.path();
        let url = format!("{}/item/{path}", self.base_url);
        let cache_key = format!("item_{path}");
        self.fetch_with_cache(&url, &cache_key)
    }

    /// Full-text search with an optional type filter. The filter is sorted
    /// before joining so two calls differing only in filter order share one
    /// cache slot.
    pub fn search(&self, query: &str, types: &[&str], limit: usize) -> Result<Value, KbError> {
        let mut types: Vec<&str> = types.to_vec();
        types.sort_unstable();
        let joined = types.join(",");

        let mut url = reqwest::Url::parse(&format!("{}/search", self.base_url))
            .map_err(|err| KbError::Http(err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("limit", &limit.to_string());
            if !types.is_empty() {
                pairs.append_pair("types", &joined);
            }
        }

        let filter = if types.is_empty() { "all" } else { joined.as_str() };
        let cache_key = format!("search_{query}_{filter}_{limit}");
        self.fetch_with_cache(url.as_str(), &cache_key)
    }

    pub fn gene_info(&self, symbol: &str) -> Option<GeneInfo> {
        match self.get_item(&ItemRef::Gene(symbol.to_string())) {
            Ok(raw) => Some(normalize::gene_info(&raw)),
            Err(err) => {
                warn!(gene = symbol, error = %err, "could not fetch gene info");
                None
            }
        }
    }

    pub fn variant_info(&self, gene: &str, hgvs_p: &str) -> Option<VariantInfo> {
        let item = ItemRef::Variant {
            gene: gene.to_string(),
            hgvs_p: hgvs_p.to_string(),
        };
        match self.get_item(&item) {
            Ok(raw) => Some(normalize::variant_info(&raw)),
            Err(err) => {
                warn!(variant = %item, error = %err, "could not fetch variant info");
                None
            }
        }
    }

    pub fn pathway_info(&self, pathway_id: &str) -> Option<PathwayInfo> {
        match self.get_item(&ItemRef::Pathway(pathway_id.to_string())) {
            Ok(raw) => Some(normalize::pathway_info(&raw)),
            Err(err) => {
                warn!(pathway = pathway_id, error = %err, "could not fetch pathway info");
                None
            }
        }
    }

    pub fn cohort_coverage(&self, study_id: &str) -> Option<CohortCoverage> {
        match self.get_item(&ItemRef::Cohort(study_id.to_string())) {
            Ok(raw) => Some(normalize::cohort_coverage(&raw)),
            Err(err) => {
                warn!(cohort = study_id, error = %err, "could not fetch cohort coverage");
                None
            }
        }
    }

    pub fn policy_profile(&self, profile_name: &str) -> Option<PolicyProfile> {
        match self.get_item(&ItemRef::Policy(profile_name.to_string())) {
            Ok(raw) => Some(normalize::policy_profile(&raw)),
            Err(err) => {
                warn!(policy = profile_name, error = %err, "could not fetch policy profile");
                None
            }
        }
    }

    pub fn search_genes(&self, query: &str, limit: usize) -> Vec<GeneHit> {
        match self.search(query, &["gene"], limit) {
            Ok(raw) => normalize::gene_hits(&raw),
            Err(err) => {
                warn!(query, error = %err, "gene search failed");
                Vec::new()
            }
        }
    }

    pub fn search_variants(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        match self.search(query, &["variant"], limit) {
            Ok(raw) => normalize::search_hits(&raw),
            Err(err) => {
                warn!(query, error = %err, "variant search failed");
                Vec::new()
            }
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
