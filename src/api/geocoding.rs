use crate::{
    endpoints,
    types::{envelope::OneOrMany, GeocodingParameters, StreetRecord},
    ApiRequest, Client, Error, Result,
};

impl Client {
    /// Geocodes `addresses` and returns the service's answer verbatim, in
    /// the requested `format`.
    pub async fn geocoding(&self, params: &GeocodingParameters) -> Result<String> {
        let request = ApiRequest::get(endpoints::GEOCODER).query(params)?;
        Ok(self.call_text(request).await?.data)
    }

    /// Geocodes a batch of addresses posted as a form.
    pub async fn batch_geocoding(&self, params: &GeocodingParameters) -> Result<String> {
        let request = ApiRequest::post(endpoints::GEOCODER).form([
            ("strExportFormat", params.format.clone().unwrap_or_default()),
            ("addresses", params.addresses.clone().unwrap_or_default()),
        ]);
        Ok(self.call_text(request).await?.data)
    }

    /// Reads street records: one record when `pk` is set, otherwise a page
    /// selected by `offset`/`limit`, otherwise all of them.
    pub async fn rapid_street_data(&self, params: &GeocodingParameters) -> Result<Vec<StreetRecord>> {
        let path = match params.pk.filter(|pk| *pk > 0) {
            Some(pk) => format!("{}/{}/", endpoints::RAPID_STREET_DATA, pk),
            None => match params.window_segment() {
                Some(window) => format!("{}/{}", endpoints::RAPID_STREET_DATA, window),
                None => endpoints::RAPID_STREET_DATA.to_string(),
            },
        };
        self.street_records(path, params).await
    }

    /// Reads the streets of `zipcode`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when `zipcode` is unset.
    pub async fn rapid_street_zipcode(&self, params: &GeocodingParameters) -> Result<Vec<StreetRecord>> {
        let zipcode = required(&params.zipcode, "Zipcode is not defined!...")?;
        let path = format!(
            "{}/{}/{}",
            endpoints::RAPID_STREET_ZIPCODE,
            zipcode,
            params.window_segment().unwrap_or_default()
        );
        self.street_records(path, params).await
    }

    /// Reads the service area of a house number in `zipcode`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when `zipcode` or `housenumber`
    /// is unset.
    pub async fn rapid_street_service(&self, params: &GeocodingParameters) -> Result<Vec<StreetRecord>> {
        let zipcode = required(&params.zipcode, "Zipcode is not defined!...")?;
        let housenumber = required(&params.housenumber, "Housenumber is not defined!...")?;
        let path = format!(
            "{}/{}/{}/{}",
            endpoints::RAPID_STREET_SERVICE,
            zipcode,
            housenumber,
            params.window_segment().unwrap_or_default()
        );
        self.street_records(path, params).await
    }

    async fn street_records(&self, path: String, params: &GeocodingParameters) -> Result<Vec<StreetRecord>> {
        let request = ApiRequest::get(path).query(params)?;
        let records = self.call::<OneOrMany<StreetRecord>>(request).await?.data;
        Ok(records.into_vec())
    }
}

fn required<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::InvalidParameter(message.to_string()))
}
