//! Customer entity, request body, and the public view that omits the secret.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX_CHARS: usize = 25;
pub const SECRET_MAX_CHARS: usize = 500;

/// Stored customer row. Only the development-only listing serializes this directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub surname: String,
    pub age: Option<i64>,
    pub secret: Option<String>,
}

/// Body of create and update requests. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    #[schema(max_length = 25)]
    pub first_name: String,
    #[schema(max_length = 25)]
    pub surname: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    #[schema(max_length = 500)]
    pub secret: Option<String>,
}

/// Public projection of a [`Customer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i64,
    pub first_name: String,
    pub surname: String,
    pub age: Option<i64>,
}

impl Customer {
    /// Overwrite every mutable field from `input`; `id` is kept.
    pub fn replace_with(&mut self, input: CustomerInput) {
        self.first_name = input.first_name;
        self.surname = input.surname;
        self.age = input.age;
        self.secret = input.secret;
    }

    pub(crate) fn from_input(id: i64, input: CustomerInput) -> Self {
        Customer {
            id,
            first_name: input.first_name,
            surname: input.surname,
            age: input.age,
            secret: input.secret,
        }
    }
}

impl From<&Customer> for CustomerView {
    fn from(c: &Customer) -> Self {
        CustomerView {
            id: c.id,
            first_name: c.first_name.clone(),
            surname: c.surname.clone(),
            age: c.age,
        }
    }
}

pub fn project(customer: &Customer) -> CustomerView {
    CustomerView::from(customer)
}
