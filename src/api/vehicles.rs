use crate::{
    endpoints,
    types::{VehicleParameters, VehicleV4Parameters, VehicleV4Response, VehiclesPaginated},
    ApiRequest, Client, Error, Result,
};

/// `/api/v4/vehicles/{vehicle_id}`.
fn vehicle_path(vehicle: &VehicleV4Parameters) -> Result<String> {
    let vehicle_id = vehicle
        .vehicle_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::InvalidParameter("Vehicle ID is required".to_string()))?;
    Ok(format!("{}/{}", endpoints::VEHICLES, vehicle_id))
}

impl Client {
    pub async fn create_vehicle(&self, vehicle: &VehicleV4Parameters) -> Result<VehicleV4Response> {
        let request = ApiRequest::post(endpoints::VEHICLES).json(vehicle)?;
        Ok(self.call(request).await?.data)
    }

    /// Lists vehicles, one page at a time.
    pub async fn get_vehicles(&self, params: &VehicleParameters) -> Result<VehiclesPaginated> {
        let request = ApiRequest::get(endpoints::VEHICLES).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Fetches the vehicle selected by `vehicle_id`.
    pub async fn get_vehicle(&self, params: &VehicleParameters) -> Result<VehicleV4Response> {
        let request = ApiRequest::get(endpoints::VEHICLES).query(params)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn update_vehicle(&self, vehicle: &VehicleV4Parameters) -> Result<VehicleV4Response> {
        let request = ApiRequest::put(vehicle_path(vehicle)?).json(vehicle)?;
        Ok(self.call(request).await?.data)
    }

    /// Deletes a vehicle and returns it as it was before removal. The
    /// parameters travel in the request body as well.
    pub async fn delete_vehicle(&self, vehicle: &VehicleV4Parameters) -> Result<VehicleV4Response> {
        let request = ApiRequest::delete(vehicle_path(vehicle)?).json(vehicle)?;
        Ok(self.call(request).await?.data)
    }
}
