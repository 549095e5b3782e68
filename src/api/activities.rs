use super::ensure;
use crate::{
    endpoints,
    types::{envelope::StatusResponse, Activity, ActivityParameters, Page},
    ApiRequest, Client, Result,
};

impl Client {
    /// Reads the activity feed, filtered by route, member, or type.
    pub async fn get_activity_feed(&self, params: &ActivityParameters) -> Result<Page<Activity>> {
        let request = ApiRequest::get(endpoints::ACTIVITY_FEED).query(params)?;
        Ok(self.call(request).await?.data)
    }

    /// Reads activities for reporting. Same feed as
    /// [`get_activity_feed`](Self::get_activity_feed), typically with a
    /// `start`/`end` window.
    pub async fn get_analytics(&self, params: &ActivityParameters) -> Result<Page<Activity>> {
        self.get_activity_feed(params).await
    }

    /// Posts a custom message to the activity stream.
    pub async fn log_custom_activity(&self, activity: &Activity) -> Result<()> {
        let request = ApiRequest::post(endpoints::ACTIVITY_FEED).json(activity)?;
        let response = self.call::<StatusResponse>(request).await?.data;
        ensure(response.status, "Activity was not logged")
    }
}
