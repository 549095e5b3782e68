use super::{ensure, rejected};
use crate::{
    endpoints,
    types::{
        envelope::{
            DeletedDestinationResponse, OptimizationsResponse, RemoveOptimizationResponse,
            StatusResponse,
        },
        Address, DataObject, HybridDepotParameters, HybridOptimizationParameters,
        OptimizationParameters, ProblemBody, RouteParameters, RouteParametersQuery,
    },
    ApiRequest, Client, Result,
};
use serde::Serialize;

impl Client {
    /// Submits a new optimization problem.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use route4me::{Client, types::*};
    ///
    /// # async fn example() -> Result<(), route4me::Error> {
    /// let client = Client::new("11111111111111111111111111111111")?;
    /// let problem = OptimizationParameters {
    ///     addresses: Some(vec![
    ///         Address { is_depot: Some(true), ..Address::new("754 5th Ave New York, NY 10019", 40.7636197, -73.9744388) },
    ///         Address::new("717 5th Ave New York, NY 10022", 40.7669692, -73.9693864),
    ///     ]),
    ///     parameters: Some(RouteParameters {
    ///         algorithm_type: Some(AlgorithmType::Tsp),
    ///         route_name: Some("Single Driver Round Trip".to_string()),
    ///         optimize: Some(Optimize::Distance),
    ///         rt: Some(true),
    ///         ..Default::default()
    ///     }),
    ///     ..Default::default()
    /// };
    ///
    /// let solved = client.run_optimization(&problem).await?;
    /// println!("Problem {} is in state {:?}", solved.optimization_problem_id, solved.state);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_optimization(&self, params: &OptimizationParameters) -> Result<DataObject> {
        let request = ApiRequest::post(endpoints::OPTIMIZATION)
            .query(params)?
            .json(&params.body())?;
        Ok(self.call(request).await?.data)
    }

    pub async fn get_optimization(&self, params: &OptimizationParameters) -> Result<DataObject> {
        let request = ApiRequest::get(endpoints::OPTIMIZATION).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Lists optimization problems, using `limit`/`offset` of the query.
    pub async fn get_optimizations(&self, query: &RouteParametersQuery) -> Result<Vec<DataObject>> {
        let request = ApiRequest::get(endpoints::OPTIMIZATION).query(query)?;
        let response = self.call::<OptimizationsResponse>(request).await?;
        Ok(response.data.optimizations)
    }

    /// Updates an optimization problem, re-optimizing it when
    /// `reoptimize` is set.
    pub async fn update_optimization(&self, params: &OptimizationParameters) -> Result<DataObject> {
        let mut request = ApiRequest::put(endpoints::OPTIMIZATION).query(params)?;
        let body = params.body();
        if !body.is_empty() {
            request = request.json(&body)?;
        }
        Ok(self.call(request).await?.data)
    }

    /// Removes optimization problems. Succeeds only when the service reports
    /// at least one removal.
    pub async fn remove_optimization(&self, optimization_problem_ids: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            optimization_problem_ids: &'a [String],
        }

        let request = ApiRequest::delete(endpoints::OPTIMIZATION)
            .with_query_param("redirect", 0)
            .json(&Body {
                optimization_problem_ids,
            })?;
        let response = self.call::<RemoveOptimizationResponse>(request).await?.data;
        ensure(
            response.status && response.removed > 0,
            "Error removing optimization",
        )
    }

    pub async fn remove_destination_from_optimization(
        &self,
        optimization_problem_id: &str,
        route_destination_id: i64,
    ) -> Result<()> {
        let request = ApiRequest::delete(endpoints::ADDRESS)
            .with_query_param("optimization_problem_id", optimization_problem_id)
            .with_query_param("route_destination_id", route_destination_id);
        let response = self.call::<DeletedDestinationResponse>(request).await?.data;
        ensure(response.deleted, "Destination was not removed from the optimization")
    }

    /// Inserts orders into an existing optimization problem.
    ///
    /// The problem ID and `redirect` flag come from `params`.
    pub async fn add_orders_to_optimization(
        &self,
        params: &OptimizationParameters,
        orders: &[Address],
        parameters: &RouteParameters,
    ) -> Result<DataObject> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            optimization_problem_id: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::query::flag::serialize")]
            redirect: Option<bool>,
        }

        let request = ApiRequest::put(endpoints::OPTIMIZATION)
            .query(&Query {
                optimization_problem_id: params.optimization_problem_id.as_deref(),
                redirect: params.redirect,
            })?
            .json(&ProblemBody {
                parameters: Some(parameters),
                addresses: Some(orders),
            })?;
        Ok(self.call(request).await?.data)
    }

    /// Waits for the problem to reach its final state and returns the ID of
    /// its first route.
    pub async fn get_route_id(&self, optimization_problem_id: &str) -> Result<String> {
        let request = ApiRequest::get(endpoints::OPTIMIZATION)
            .with_query_param("optimization_problem_id", optimization_problem_id)
            .with_query_param("wait_for_final_state", 1);
        let problem = self.call::<DataObject>(request).await?.data;
        problem
            .routes
            .into_iter()
            .next()
            .map(|route| route.route_id)
            .ok_or_else(|| rejected("Optimization problem has no routes"))
    }

    pub async fn get_hybrid_optimization(
        &self,
        params: &HybridOptimizationParameters,
    ) -> Result<DataObject> {
        let request = ApiRequest::get(endpoints::HYBRID_OPTIMIZATION).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Replaces (or adds to) the depots of a scheduled hybrid optimization.
    pub async fn add_depots_to_hybrid_optimization(
        &self,
        params: &HybridDepotParameters,
    ) -> Result<()> {
        let request = ApiRequest::post(endpoints::HYBRID_DEPOTS).json(params)?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Depots were not added to the hybrid optimization")
    }
}
