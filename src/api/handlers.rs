//! API Handlers
//!
//! HTTP request handlers for the CRM and property listing endpoints.
//! Mutation handlers answer validation failures in-band with
//! `ok: false`; only store failures surface as HTTP errors.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::cache::{QueryCache, SystemClock};
use crate::crm::filters::{sort_customers, sort_orders, sort_products};
use crate::crm::{mutations, CrmStore, CustomerFilter, OrderFilter, ProductFilter};
use crate::error::Result;
use crate::models::{
    BulkCustomersResponse, CacheMetricsResponse, CreateCustomerRequest, CreateOrderRequest,
    CreateProductRequest, CreatePropertyRequest, Customer, CustomerListParams,
    CustomerMutationResponse, HealthResponse, ListingQuery, Order, OrderListParams,
    OrderMutationResponse, Product, ProductListParams, ProductMutationResponse, Property,
    RecordList, RestockResponse,
};
use crate::properties::{self, MemoryProperties, Page, PropertySource};

// == App State ==
/// Application state shared across all handlers and the periodic jobs.
#[derive(Clone)]
pub struct AppState {
    /// Customer, product and order collections
    pub crm: Arc<CrmStore>,
    /// Authoritative property store behind the cache
    pub properties: Arc<dyn PropertySource>,
    /// Snapshot cache for the listing endpoint
    pub cache: Arc<RwLock<QueryCache>>,
    /// TTL applied to cached snapshots
    pub cache_ttl: Duration,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        crm: Arc<CrmStore>,
        properties: Arc<dyn PropertySource>,
        cache: QueryCache,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            crm,
            properties,
            cache: Arc::new(RwLock::new(cache)),
            cache_ttl,
        }
    }

    /// Creates a new AppState from configuration, with empty in-memory
    /// stores and a system-clock cache.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            Arc::new(CrmStore::new()),
            Arc::new(MemoryProperties::new()),
            QueryCache::new(Arc::new(SystemClock)),
            Duration::from_secs(config.cache_ttl),
        )
    }
}

// == Property Handlers ==
/// Handler for GET /properties
///
/// Serves the cached property collection, filtered and paginated per
/// the query string. The snapshot is loaded from the store on a cache
/// miss and kept for the configured TTL, so fresh writes may not show
/// up until the snapshot expires.
pub async fn list_properties_handler(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<Page<Property>>> {
    let snapshot =
        properties::service::get_or_load(&state.cache, &*state.properties, state.cache_ttl)
            .await?;
    Ok(Json(properties::service::apply(&snapshot, &params)))
}

/// Handler for POST /properties
///
/// Adds a listing to the property store. The cached snapshot is left
/// alone; the new record becomes visible once the snapshot expires.
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<Json<Property>> {
    let property = state.properties.insert(req).await?;
    Ok(Json(property))
}

/// Handler for GET /cache/metrics
///
/// Reports cache hits, misses and the derived hit ratio.
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<CacheMetricsResponse> {
    let stats = state.cache.read().await.stats();
    let metrics = CacheMetricsResponse::new(&stats);

    info!(
        hits = metrics.hits,
        misses = metrics.misses,
        hit_ratio = metrics.hit_ratio,
        "cache metrics requested"
    );
    Json(metrics)
}

// == Customer Handlers ==
/// Handler for GET /customers
pub async fn list_customers_handler(
    State(state): State<AppState>,
    Query(params): Query<CustomerListParams>,
) -> Json<RecordList<Customer>> {
    let mut customers = CustomerFilter::from_params(&params).apply(&state.crm.customers());
    if let Some(order_by) = &params.order_by {
        sort_customers(&mut customers, order_by);
    }
    Json(RecordList::new(customers))
}

/// Handler for POST /customers
pub async fn create_customer_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerRequest>,
) -> Json<CustomerMutationResponse> {
    Json(mutations::create_customer(&state.crm, req))
}

/// Handler for POST /customers/bulk
pub async fn bulk_create_customers_handler(
    State(state): State<AppState>,
    Json(rows): Json<Vec<CreateCustomerRequest>>,
) -> Json<BulkCustomersResponse> {
    Json(mutations::bulk_create_customers(&state.crm, rows))
}

// == Product Handlers ==
/// Handler for GET /products
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Json<RecordList<Product>> {
    let mut products = ProductFilter::from_params(&params).apply(&state.crm.products());
    if let Some(order_by) = &params.order_by {
        sort_products(&mut products, order_by);
    }
    Json(RecordList::new(products))
}

/// Handler for POST /products
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Json<ProductMutationResponse> {
    Json(mutations::create_product(&state.crm, req))
}

/// Handler for POST /products/restock
///
/// Runs one replenish pass over every low-stock product.
pub async fn restock_products_handler(State(state): State<AppState>) -> Json<RestockResponse> {
    Json(mutations::replenish_low_stock(&state.crm))
}

// == Order Handlers ==
/// Handler for GET /orders
pub async fn list_orders_handler(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Json<RecordList<Order>> {
    let customers = state.crm.customers();
    let products = state.crm.products();
    let mut orders =
        OrderFilter::from_params(&params).apply(&state.crm.orders(), &customers, &products);
    if let Some(order_by) = &params.order_by {
        sort_orders(&mut orders, order_by);
    }
    Json(RecordList::new(orders))
}

/// Handler for POST /orders
pub async fn create_order_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Json<OrderMutationResponse> {
    Json(mutations::create_order(&state.crm, req))
}

// == Health Handler ==
/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
