use super::ensure;
use crate::{
    endpoints,
    types::{envelope::StatusResponse, Order, OrderParameters, Page},
    ApiRequest, Client, Error, Result,
};
use serde::Serialize;

impl Client {
    /// Lists orders, using `limit`/`offset` and the date filters.
    pub async fn get_orders(&self, params: &OrderParameters) -> Result<Page<Order>> {
        let request = ApiRequest::get(endpoints::ORDER).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Fetches the orders listed in `order_id` (comma-separated).
    ///
    /// The service answers a lone ID with a bare object, so a single ID is
    /// sent twice to always get the list form back.
    pub async fn get_order_by_id(&self, params: &OrderParameters) -> Result<Vec<Order>> {
        let order_id = params
            .order_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::InvalidParameter("Order ID is required".to_string()))?;

        let ids = if order_id.contains(',') {
            order_id.to_string()
        } else {
            format!("{order_id},{order_id}")
        };
        let request = ApiRequest::get(endpoints::ORDER)
            .query(params)?
            .with_query_param("order_id", ids);
        let response = self.call::<Page<Order>>(request).await?;
        Ok(response.data.results)
    }

    /// Searches orders by `query`, returning the columns named in `fields`.
    pub async fn search_orders(&self, params: &OrderParameters) -> Result<Vec<Order>> {
        Ok(self.get_orders(params).await?.results)
    }

    pub async fn add_order(&self, order: &Order) -> Result<Order> {
        let request = ApiRequest::post(endpoints::ORDER).json(order)?;
        Ok(self.call(request).await?.data)
    }

    /// Updates the order selected by `order_id`. Fields set to `Field::Null`
    /// are cleared.
    pub async fn update_order(&self, order: &Order) -> Result<Order> {
        let request = ApiRequest::put(endpoints::ORDER).json(order)?.keep_nulls();
        Ok(self.call(request).await?.data)
    }

    pub async fn remove_orders(&self, order_ids: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            order_ids: &'a [String],
        }

        let request = ApiRequest::delete(endpoints::ORDER).json(&Body { order_ids })?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Orders were not removed")
    }
}
