use super::{ensure, rejected};
use crate::{
    endpoints,
    query::comma_joined,
    types::{
        envelope::{DeleteRoutesResponse, DuplicateRouteResponse, StatusResponse},
        Address, DataObjectRoute, MergeRoutesQuery, ProblemBody, ResequenceReoptimizeQuery,
        RouteParameters, RouteParametersQuery,
    },
    ApiRequest, Client, Error, Result,
};
use serde::Serialize;
use std::collections::BTreeMap;

impl Client {
    /// Fetches one route, selected by `route_id`.
    ///
    /// Set `directions`, `route_path_output`, or `device_tracking_history`
    /// to include the matching sections in the response.
    pub async fn get_route(&self, query: &RouteParametersQuery) -> Result<DataObjectRoute> {
        let request = ApiRequest::get(endpoints::ROUTE).query(query)?;
        Ok(self.call(request).await?.data)
    }

    /// Lists routes, using `limit`/`offset` of the query.
    pub async fn get_routes(&self, query: &RouteParametersQuery) -> Result<Vec<DataObjectRoute>> {
        let request = ApiRequest::get(endpoints::ROUTE).query(query)?;
        Ok(self.call(request).await?.data)
    }

    /// Updates a route's settings and, when given, its addresses.
    pub async fn update_route(&self, query: &RouteParametersQuery) -> Result<DataObjectRoute> {
        let body = ProblemBody {
            parameters: query.parameters.as_ref(),
            addresses: query.addresses.as_deref(),
        };
        let mut request = ApiRequest::put(endpoints::ROUTE).query(query)?;
        if !body.is_empty() {
            request = request.json(&body)?;
        }
        Ok(self.call(request).await?.data)
    }

    /// Duplicates a route and returns the ID of the copy.
    ///
    /// The service answers with the optimization problem holding the copy,
    /// so this issues a second call to resolve the new route ID.
    pub async fn duplicate_route(&self, query: &RouteParametersQuery) -> Result<String> {
        let request = ApiRequest::get(endpoints::DUPLICATE_ROUTE)
            .query(query)?
            .with_query_param("to", "none");
        let response = self.call::<DuplicateRouteResponse>(request).await?.data;

        match response.optimization_problem_id {
            Some(problem_id) if response.success => self.get_route_id(&problem_id).await,
            _ => Err(rejected("Route was not duplicated")),
        }
    }

    /// Deletes routes and returns the IDs the service reports as deleted.
    pub async fn delete_routes(&self, route_ids: &[String]) -> Result<Vec<String>> {
        let request =
            ApiRequest::delete(endpoints::ROUTE).with_query_param("route_id", comma_joined(route_ids));
        let response = self.call::<DeleteRoutesResponse>(request).await?.data;
        ensure(response.deleted, "Routes were not deleted")?;
        Ok(response.route_ids)
    }

    /// Merges routes into one, starting from the given depot.
    pub async fn merge_routes(&self, query: &MergeRoutesQuery) -> Result<()> {
        let remove_origin = if query.remove_origin { "True" } else { "False" };
        let request = ApiRequest::post(endpoints::MERGE_ROUTES).form([
            ("route_ids", comma_joined(&query.route_ids)),
            ("depot_address", query.depot_address.clone()),
            ("remove_origin", remove_origin.to_string()),
            ("depot_lat", query.depot_lat.to_string()),
            ("depot_lng", query.depot_lng.to_string()),
        ]);
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Routes were not merged")
    }

    pub async fn resequence_reoptimize_route(&self, query: &ResequenceReoptimizeQuery) -> Result<()> {
        let request = ApiRequest::get(endpoints::ROUTE_REOPTIMIZE).query(query)?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Route was not resequenced")
    }

    /// Sets the stop order of a route by hand.
    ///
    /// A stop without a destination ID is sent as `-1`; a stop without a
    /// sequence number takes its position in `addresses`.
    pub async fn manually_resequence_route(
        &self,
        route_id: &str,
        addresses: &[Address],
    ) -> Result<DataObjectRoute> {
        #[derive(Serialize)]
        struct Stop {
            route_destination_id: i64,
            sequence_no: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_depot: Option<bool>,
        }

        #[derive(Serialize)]
        struct Body {
            addresses: Vec<Stop>,
        }

        let addresses = addresses
            .iter()
            .zip(0_i64..)
            .map(|(address, position)| Stop {
                route_destination_id: address.route_destination_id.unwrap_or(-1),
                sequence_no: address.sequence_no.unwrap_or(position),
                is_depot: address.is_depot,
            })
            .collect();

        let request = ApiRequest::put(endpoints::ROUTE)
            .with_query_param("route_id", route_id)
            .json(&Body { addresses })?;
        Ok(self.call(request).await?.data)
    }

    /// Emails a route to a recipient.
    pub async fn share_route(&self, query: &RouteParametersQuery, recipient_email: &str) -> Result<()> {
        let request = ApiRequest::post(endpoints::ROUTE_SHARING)
            .query(query)?
            .form([("recipient_email", recipient_email)]);
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Route was not shared")
    }

    pub async fn update_route_custom_data(
        &self,
        route_id: &str,
        route_destination_id: i64,
        custom_fields: &BTreeMap<String, String>,
    ) -> Result<Address> {
        #[derive(Serialize)]
        struct Body<'a> {
            custom_fields: &'a BTreeMap<String, String>,
        }

        let request = ApiRequest::put(endpoints::ADDRESS)
            .with_query_param("route_id", route_id)
            .with_query_param("route_destination_id", route_destination_id)
            .json(&Body { custom_fields })?;
        Ok(self.call(request).await?.data)
    }

    /// Updates a destination. `route_id` and `route_destination_id` select
    /// it; every other set field is written.
    pub async fn update_route_destination(&self, address: &Address) -> Result<Address> {
        let (Some(route_id), Some(destination_id)) =
            (address.route_id.as_deref(), address.route_destination_id)
        else {
            return Err(Error::InvalidParameter(
                "Route ID and route destination ID are required".to_string(),
            ));
        };

        let request = ApiRequest::put(endpoints::ADDRESS)
            .with_query_param("route_id", route_id)
            .with_query_param("route_destination_id", destination_id)
            .json(address)?;
        Ok(self.call(request).await?.data)
    }

    /// Inserts orders into an existing route.
    pub async fn add_orders_to_route(
        &self,
        query: &RouteParametersQuery,
        orders: &[Address],
        parameters: &RouteParameters,
    ) -> Result<DataObjectRoute> {
        let request = ApiRequest::put(endpoints::ROUTE).query(query)?.json(&ProblemBody {
            parameters: Some(parameters),
            addresses: Some(orders),
        })?;
        Ok(self.call(request).await?.data)
    }
}
