use super::ensure;
use crate::{
    endpoints,
    types::{
        envelope::StatusResponse, AvoidanceZone, AvoidanceZoneParameters, AvoidanceZoneQuery,
        TerritoryQuery, TerritoryZone,
    },
    ApiRequest, Client, Result,
};
use serde::Serialize;

/// Query selecting the zone that a create/update body applies to.
#[derive(Serialize)]
struct ZoneTarget<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    device_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    territory_id: Option<&'a str>,
}

impl<'a> From<&'a AvoidanceZoneParameters> for ZoneTarget<'a> {
    fn from(params: &'a AvoidanceZoneParameters) -> Self {
        Self {
            device_id: params.device_id.as_deref(),
            territory_id: params.territory_id.as_deref(),
        }
    }
}

fn zone_write(request: ApiRequest, params: &AvoidanceZoneParameters) -> Result<ApiRequest> {
    request.query(&ZoneTarget::from(params))?.json(params)
}

impl Client {
    pub async fn add_avoidance_zone(&self, params: &AvoidanceZoneParameters) -> Result<AvoidanceZone> {
        let request = zone_write(ApiRequest::post(endpoints::AVOIDANCE), params)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn get_avoidance_zones(&self, query: &AvoidanceZoneQuery) -> Result<Vec<AvoidanceZone>> {
        let request = ApiRequest::get(endpoints::AVOIDANCE).query(query)?;
        Ok(self.call(request).await?.data)
    }

    /// Fetches the zone selected by `territory_id`.
    pub async fn get_avoidance_zone(&self, query: &AvoidanceZoneQuery) -> Result<AvoidanceZone> {
        let request = ApiRequest::get(endpoints::AVOIDANCE).query(query)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn update_avoidance_zone(&self, params: &AvoidanceZoneParameters) -> Result<AvoidanceZone> {
        let request = zone_write(ApiRequest::put(endpoints::AVOIDANCE), params)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn delete_avoidance_zone(&self, query: &AvoidanceZoneQuery) -> Result<()> {
        let request = ApiRequest::delete(endpoints::AVOIDANCE).query(query)?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Avoidance zone was not deleted")
    }

    pub async fn create_territory(&self, params: &AvoidanceZoneParameters) -> Result<TerritoryZone> {
        let request = zone_write(ApiRequest::post(endpoints::TERRITORY), params)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn get_territories(&self, query: &AvoidanceZoneQuery) -> Result<Vec<TerritoryZone>> {
        let request = ApiRequest::get(endpoints::TERRITORY).query(query)?;
        Ok(self.call(request).await?.data)
    }

    /// Fetches one territory. With `addresses` set, the IDs of the
    /// address book contacts inside it are included.
    pub async fn get_territory(&self, query: &TerritoryQuery) -> Result<TerritoryZone> {
        let request = ApiRequest::get(endpoints::TERRITORY).query(query)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn update_territory(&self, params: &AvoidanceZoneParameters) -> Result<TerritoryZone> {
        let request = zone_write(ApiRequest::put(endpoints::TERRITORY), params)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn remove_territory(&self, query: &AvoidanceZoneQuery) -> Result<()> {
        let request = ApiRequest::delete(endpoints::TERRITORY).query(query)?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Territory was not removed")
    }
}
