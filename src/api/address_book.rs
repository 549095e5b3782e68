use super::ensure;
use crate::{
    endpoints,
    types::{
        envelope::StatusResponse, AddressBookContact, AddressBookParameters, Page,
        SearchLocationsResponse,
    },
    ApiRequest, Client, Result,
};
use serde::Serialize;

impl Client {
    /// Lists address book contacts, using `limit`/`offset` of the query.
    pub async fn get_address_book_contacts(
        &self,
        params: &AddressBookParameters,
    ) -> Result<Page<AddressBookContact>> {
        let request = ApiRequest::get(endpoints::ADDRESS_BOOK).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Fetches the contacts listed in `address_id` (comma-separated).
    pub async fn get_address_book_location(
        &self,
        params: &AddressBookParameters,
    ) -> Result<Page<AddressBookContact>> {
        self.get_address_book_contacts(params).await
    }

    /// Full text search over the address book. Each row of the result holds
    /// the columns named in `fields`.
    pub async fn search_address_book_location(
        &self,
        params: &AddressBookParameters,
    ) -> Result<SearchLocationsResponse> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            query: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            fields: Option<&'a str>,
            offset: u32,
            limit: u32,
        }

        let request = ApiRequest::get(endpoints::ADDRESS_BOOK).query(&Query {
            query: params.query.as_deref(),
            fields: params.fields.as_deref(),
            offset: params.offset.unwrap_or(0),
            limit: params.limit.unwrap_or(0),
        })?;
        Ok(self.call(request).await?.data)
    }

    pub async fn add_address_book_contact(&self, contact: &AddressBookContact) -> Result<AddressBookContact> {
        let request = ApiRequest::post(endpoints::ADDRESS_BOOK).json(contact)?;
        Ok(self.call(request).await?.data)
    }

    /// Updates a contact selected by `address_id`. Fields set to
    /// `Field::Null` are cleared.
    pub async fn update_address_book_contact(
        &self,
        contact: &AddressBookContact,
    ) -> Result<AddressBookContact> {
        let request = ApiRequest::put(endpoints::ADDRESS_BOOK)
            .json(contact)?
            .keep_nulls();
        Ok(self.call(request).await?.data)
    }

    pub async fn remove_address_book_contacts(&self, address_ids: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            address_ids: &'a [String],
        }

        let request = ApiRequest::delete(endpoints::ADDRESS_BOOK).json(&Body { address_ids })?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Address book contacts were not removed")
    }
}
