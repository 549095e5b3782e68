use crate::{
    endpoints,
    types::{
        envelope::DeviceHistoryResponse, DataObjectRoute, FindAssetResponse, GpsParameters,
        RouteParametersQuery, TrackingHistory,
    },
    ApiRequest, Client, Result,
};

impl Client {
    /// Fetches a route with its device tracking history.
    pub async fn get_last_location(&self, query: &RouteParametersQuery) -> Result<DataObjectRoute> {
        let request = ApiRequest::get(endpoints::ROUTE)
            .query(query)?
            .with_query_param("device_tracking_history", 1);
        Ok(self.call(request).await?.data)
    }

    /// Returns the recorded positions of a device, or `None` when the
    /// service has none for the requested period.
    pub async fn get_device_location_history(
        &self,
        params: &GpsParameters,
    ) -> Result<Option<Vec<TrackingHistory>>> {
        let request = ApiRequest::get(endpoints::DEVICE_LOCATION).query(params)?;
        let history = self.call::<DeviceHistoryResponse>(request).await?.data.data;
        Ok(Some(history).filter(|points| !points.is_empty()))
    }

    /// Reports a device position. The service answers in plain text.
    pub async fn set_gps(&self, params: &GpsParameters) -> Result<String> {
        let request = ApiRequest::get(endpoints::SET_GPS).query(params)?;
        Ok(self.call_text(request).await?.data)
    }

    /// Looks up the delivery status of a tracking number.
    pub async fn find_asset(&self, tracking: &str) -> Result<FindAssetResponse> {
        let request = ApiRequest::get(endpoints::ASSET_TRACKING).with_query_param("tracking", tracking);
        Ok(self.call(request).await?.data)
    }
}
