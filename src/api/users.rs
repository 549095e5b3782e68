use super::ensure;
use crate::{
    endpoints,
    types::{
        envelope::{ResultsResponse, StatusResponse},
        MemberConfigurationDataResponse, MemberConfigurationParameters,
        MemberConfigurationResponse, MemberParameters, MemberParametersV4, MemberResponse,
        MemberResponseV4,
    },
    ApiRequest, Client, Result,
};
use serde::Serialize;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Client {
    /// Lists the members of the account.
    pub async fn get_users(&self) -> Result<Vec<MemberResponseV4>> {
        let request = ApiRequest::get(endpoints::USERS);
        let response = self.call::<ResultsResponse<MemberResponseV4>>(request).await?;
        Ok(response.data.results)
    }

    pub async fn get_user_by_id(&self, member_id: i64) -> Result<MemberResponseV4> {
        let request = ApiRequest::get(endpoints::USERS).with_query_param("member_id", member_id);
        Ok(self.call(request).await?.data)
    }

    pub async fn create_user(&self, member: &MemberParametersV4) -> Result<MemberResponseV4> {
        let request = ApiRequest::post(endpoints::USERS).json(member)?;
        Ok(self.call(request).await?.data)
    }

    /// Updates a member. Fields set to `Field::Null` are sent as `null` and
    /// cleared on the service.
    pub async fn update_user(&self, member: &MemberParametersV4) -> Result<MemberResponseV4> {
        let request = ApiRequest::put(endpoints::USERS).json(member)?.keep_nulls();
        Ok(self.call(request).await?.data)
    }

    pub async fn delete_user(&self, member_id: i64) -> Result<()> {
        #[derive(Serialize)]
        struct Body {
            member_id: i64,
        }

        let request = ApiRequest::delete(endpoints::USERS).json(&Body { member_id })?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "User was not deleted")
    }

    /// Signs a member in with `email` and `password`.
    pub async fn authenticate_user(&self, member: &MemberParameters) -> Result<MemberResponse> {
        let request = ApiRequest::post(endpoints::USER_AUTHENTICATION).form([
            ("strEmail", text(&member.email)),
            ("strPassword", text(&member.password)),
            ("format", text(&member.format)),
        ]);
        Ok(self.call(request).await?.data)
    }

    /// Registers a new account. `plan` and `member_type` go to the query,
    /// everything else to the form.
    pub async fn register_user(&self, member: &MemberParameters) -> Result<MemberResponse> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            plan: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            member_type: Option<i32>,
        }

        let device_type = member
            .device_type
            .map(|device| device.as_str().to_string())
            .unwrap_or_default();
        let accept_terms = if member.accept_terms { "1" } else { "0" };

        let request = ApiRequest::post(endpoints::USER_REGISTRATION)
            .query(&Query {
                plan: member.plan.as_deref(),
                member_type: member.member_type,
            })?
            .form([
                ("strIndustry", text(&member.industry)),
                ("strFirstName", text(&member.first_name)),
                ("strLastName", text(&member.last_name)),
                ("strEmail", text(&member.email)),
                ("format", text(&member.format)),
                ("chkTerms", accept_terms.to_string()),
                ("device_type", device_type),
                ("strPassword_1", text(&member.password)),
                ("strPassword_2", text(&member.password_confirmation)),
            ]);
        Ok(self.call(request).await?.data)
    }

    pub async fn validate_session(&self, member: &MemberParameters) -> Result<MemberResponse> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            session_guid: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            member_id: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            format: Option<&'a str>,
        }

        let request = ApiRequest::get(endpoints::VALIDATE_SESSION).query(&Query {
            session_guid: member.session_guid.as_deref(),
            member_id: member.member_id,
            format: member.format.as_deref(),
        })?;
        Ok(self.call(request).await?.data)
    }

    pub async fn create_configuration_key(
        &self,
        config: &MemberConfigurationParameters,
    ) -> Result<MemberConfigurationResponse> {
        let request = ApiRequest::post(endpoints::USER_CONFIGURATION).json(config)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn update_configuration_key(
        &self,
        config: &MemberConfigurationParameters,
    ) -> Result<MemberConfigurationResponse> {
        let request = ApiRequest::put(endpoints::USER_CONFIGURATION).json(config)?;
        Ok(self.call(request).await?.data)
    }

    pub async fn remove_configuration_key(&self, config_key: &str) -> Result<MemberConfigurationResponse> {
        #[derive(Serialize)]
        struct Body<'a> {
            config_key: &'a str,
        }

        let request = ApiRequest::delete(endpoints::USER_CONFIGURATION).json(&Body { config_key })?;
        Ok(self.call(request).await?.data)
    }

    /// Reads one configuration key, or all of them when `config_key` is
    /// `None`.
    pub async fn get_configuration_data(
        &self,
        config_key: Option<&str>,
    ) -> Result<MemberConfigurationDataResponse> {
        let mut request = ApiRequest::get(endpoints::USER_CONFIGURATION);
        if let Some(key) = config_key {
            request = request.with_query_param("config_key", key);
        }
        Ok(self.call(request).await?.data)
    }
}
