use super::{ensure, rejected};
use crate::{
    endpoints,
    types::{
        envelope::{DeletedDestinationResponse, MarkDepartedResponse, MoveDestinationResponse},
        Address, AddressParameters, DataObjectRoute,
    },
    ApiRequest, Client, Error, Result,
};
use serde::Serialize;

/// Query of the visited/departed actions. The service only accepts these
/// when `member_id` is present.
#[derive(Serialize)]
struct MarkQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    route_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::query::flag::serialize")]
    is_visited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::query::flag::serialize")]
    is_departed: Option<bool>,
    member_id: i64,
}

impl<'a> MarkQuery<'a> {
    fn new(params: &'a AddressParameters) -> Self {
        Self {
            route_id: params.route_id.as_deref(),
            address_id: params.address_id,
            is_visited: None,
            is_departed: None,
            member_id: 1,
        }
    }
}

impl Client {
    /// Fetches one destination of a route. Set `notes` to include its notes.
    pub async fn get_address(&self, params: &AddressParameters) -> Result<Address> {
        let request = ApiRequest::get(endpoints::ADDRESS).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Adds destinations to a route and returns the stored copies of the
    /// submitted addresses, recognized with [`Address::matches_submitted`].
    ///
    /// With `optimal_position` the service inserts each address where it
    /// least lengthens the route; otherwise addresses are appended.
    pub async fn add_route_destinations(
        &self,
        route_id: &str,
        addresses: &[Address],
        optimal_position: bool,
    ) -> Result<Vec<Address>> {
        self.add_route_destinations_by(route_id, addresses, optimal_position, Address::matches_submitted)
            .await
    }

    /// Like [`add_route_destinations`](Self::add_route_destinations), with a
    /// caller-supplied `matches(returned, submitted)` test.
    ///
    /// When several returned addresses match one submitted address, the last
    /// one wins. Submitted addresses without a match are left out.
    pub async fn add_route_destinations_by<F>(
        &self,
        route_id: &str,
        addresses: &[Address],
        optimal_position: bool,
        matches: F,
    ) -> Result<Vec<Address>>
    where
        F: Fn(&Address, &Address) -> bool,
    {
        #[derive(Serialize)]
        struct Body<'a> {
            addresses: &'a [Address],
            optimal_position: bool,
        }

        let request = ApiRequest::put(endpoints::ROUTE)
            .with_query_param("route_id", route_id)
            .json(&Body {
                addresses,
                optimal_position,
            })?;
        let route = self.call::<DataObjectRoute>(request).await?.data;

        Ok(addresses
            .iter()
            .filter_map(|submitted| {
                route
                    .addresses
                    .iter()
                    .rev()
                    .find(|returned| matches(*returned, submitted))
                    .cloned()
            })
            .collect())
    }

    pub async fn remove_route_destination(&self, route_id: &str, route_destination_id: i64) -> Result<()> {
        let request = ApiRequest::delete(endpoints::ADDRESS)
            .with_query_param("route_id", route_id)
            .with_query_param("route_destination_id", route_destination_id);
        let response = self.call::<DeletedDestinationResponse>(request).await?.data;
        ensure(response.deleted, "Destination was not removed from the route")
    }

    /// Moves a destination to another route, after `after_destination_id`.
    pub async fn move_destination_to_route(
        &self,
        to_route_id: &str,
        route_destination_id: i64,
        after_destination_id: i64,
    ) -> Result<()> {
        let request = ApiRequest::post(endpoints::MOVE_ROUTE_DESTINATION).form([
            ("to_route_id", to_route_id.to_string()),
            ("route_destination_id", route_destination_id.to_string()),
            ("after_destination_id", after_destination_id.to_string()),
        ]);
        let response = self.call::<MoveDestinationResponse>(request).await?.data;
        if response.success {
            return Ok(());
        }
        let message = response
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "Destination was not moved".to_string());
        Err(rejected(&message))
    }

    /// Marks a destination as visited (or not) and returns the count the
    /// service reports back.
    pub async fn mark_address_visited(&self, params: &AddressParameters) -> Result<i64> {
        let query = MarkQuery {
            is_visited: params.is_visited,
            ..MarkQuery::new(params)
        };
        let request = ApiRequest::get(endpoints::MARK_ADDRESS_VISITED).query(&query)?;
        let response = self.call_text(request).await?;
        response.raw_body.trim().parse().map_err(|_| Error::DeserializationFailed {
            serde_error: "expected an integer".to_string(),
            status: response.status,
            raw_response: response.raw_body,
        })
    }

    pub async fn mark_address_departed(&self, params: &AddressParameters) -> Result<()> {
        let query = MarkQuery {
            is_departed: params.is_departed,
            ..MarkQuery::new(params)
        };
        let request = ApiRequest::get(endpoints::MARK_ADDRESS_DEPARTED).query(&query)?;
        let response = self.call::<MarkDepartedResponse>(request).await?.data;
        let message = response
            .error
            .unwrap_or_else(|| "Destination was not marked as departed".to_string());
        ensure(response.status, &message)
    }

    /// Sets the visited flag of a destination via the address endpoint.
    pub async fn mark_address_as_visited(&self, params: &AddressParameters) -> Result<Address> {
        #[derive(Serialize)]
        struct Body {
            is_visited: bool,
        }

        let request = destination_update(params)?
            .json(&Body {
                is_visited: params.is_visited.unwrap_or_default(),
            })?;
        Ok(self.call(request).await?.data)
    }

    /// Sets the departed flag of a destination via the address endpoint.
    pub async fn mark_address_as_departed(&self, params: &AddressParameters) -> Result<Address> {
        #[derive(Serialize)]
        struct Body {
            is_departed: bool,
        }

        let request = destination_update(params)?
            .json(&Body {
                is_departed: params.is_departed.unwrap_or_default(),
            })?;
        Ok(self.call(request).await?.data)
    }
}

fn destination_update(params: &AddressParameters) -> Result<ApiRequest> {
    #[derive(Serialize)]
    struct Query<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        route_id: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        route_destination_id: Option<i64>,
    }

    ApiRequest::put(endpoints::ADDRESS).query(&Query {
        route_id: params.route_id.as_deref(),
        route_destination_id: params.route_destination_id,
    })
}
