//! Domain entities and API DTOs
//!
//! This module defines the stored record types plus the DTOs (Data
//! Transfer Objects) used for serializing/deserializing HTTP request
//! and response bodies.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{Customer, Order, Product, Property};
pub use requests::{
    CreateCustomerRequest, CreateOrderRequest, CreateProductRequest, CreatePropertyRequest,
    CustomerListParams, ListingQuery, OrderListParams, ProductListParams,
};
pub use responses::{
    BulkCustomersResponse, CacheMetricsResponse, CustomerMutationResponse, HealthResponse,
    OrderMutationResponse, ProductMutationResponse, RecordList, RestockResponse,
    RestockedProduct,
};
