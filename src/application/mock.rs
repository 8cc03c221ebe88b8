//! Mock data generators
//!
//! Deterministic-shape records for downstream test suites. Construct one
//! generator per test and let it hand out sequential ids; no state leaks
//! between generators.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockProfile {
    pub avatar: String,
    pub bio: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPreferences {
    pub theme: String,
    pub notifications: bool,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profile: MockProfile,
    pub preferences: MockPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockProduct {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub in_stock: bool,
    pub rating: f64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockOrderItem {
    pub product_id: u64,
    pub quantity: u32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockOrder {
    pub id: u64,
    pub user_id: u64,
    pub items: Vec<MockOrderItem>,
    pub total: u64,
    pub status: String,
    pub shipping_address: MockAddress,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockAuth {
    pub user: MockUser,
    pub token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub is_authenticated: bool,
    pub permissions: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockApiResponse {
    pub success: bool,
    pub data: Option<Value>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status_code: u16,
}

/// Sequential-id mock data factory
#[derive(Debug, Default)]
pub struct MockGenerator {
    next_id: u64,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn mock_user(&mut self) -> MockUser {
        let id = self.next_id();
        let now = Utc::now();

        MockUser {
            id,
            email: format!("user{id}@example.com"),
            name: format!("User {id}"),
            role: "user".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
            profile: MockProfile {
                avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={id}"),
                bio: "Mock user bio".to_string(),
                location: "Mock City, MC".to_string(),
                website: "https://example.com".to_string(),
            },
            preferences: MockPreferences {
                theme: "light".to_string(),
                notifications: true,
                language: "en".to_string(),
            },
        }
    }

    pub fn mock_product(&mut self) -> MockProduct {
        let id = self.next_id();
        let now = Utc::now();
        let categories = ["electronics", "clothing", "books", "home"];

        MockProduct {
            id,
            name: format!("Product {id}"),
            description: "Mock product description".to_string(),
            price: 10 + id * 7 % 1000,
            category: categories[(id as usize) % categories.len()].to_string(),
            in_stock: id % 3 != 0,
            rating: ((id % 5) as f64) + 0.5,
            tags: vec!["mock".to_string(), "test".to_string(), "product".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mock_order(&mut self) -> MockOrder {
        let id = self.next_id();
        let user_id = self.next_id();
        let product_id = self.next_id();
        let now = Utc::now();
        let statuses = ["pending", "processing", "shipped", "delivered"];

        MockOrder {
            id,
            user_id,
            items: vec![MockOrderItem {
                product_id,
                quantity: (id % 5 + 1) as u32,
                price: 10 + id % 100,
            }],
            total: 50 + id % 500,
            status: statuses[(id as usize) % statuses.len()].to_string(),
            shipping_address: MockAddress {
                street: "123 Mock Street".to_string(),
                city: "Mock City".to_string(),
                state: "MC".to_string(),
                zip_code: "12345".to_string(),
                country: "Mock Country".to_string(),
            },
            payment_method: "credit_card".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mock_auth(&mut self) -> MockAuth {
        let user = self.mock_user();
        let id = user.id;

        MockAuth {
            user,
            token: format!("mock-jwt-token-{id}"),
            refresh_token: format!("mock-refresh-token-{id}"),
            expires_at: Utc::now() + Duration::hours(1),
            is_authenticated: true,
            permissions: vec!["read".to_string(), "write".to_string()],
            roles: vec!["user".to_string()],
        }
    }

    pub fn mock_api_response(&mut self, data: Option<Value>) -> MockApiResponse {
        MockApiResponse {
            success: true,
            data,
            message: "Mock API response".to_string(),
            timestamp: Utc::now(),
            status_code: 200,
        }
    }

    /// Generate a batch of users
    pub fn mock_users(&mut self, count: usize) -> Vec<MockUser> {
        (0..count).map(|_| self.mock_user()).collect()
    }
}
