use super::{ensure, rejected};
use crate::{
    endpoints,
    request::MultipartForm,
    types::{
        envelope::{CustomNoteTypeResult, NoteResponse},
        AddressNote, AddressParameters, CustomNoteType, NewCustomNoteType, NoteParameters,
    },
    ApiRequest, Client, Error, Result,
};
use serde::Serialize;
use std::path::Path;

impl Client {
    /// Returns the notes attached to a destination.
    pub async fn get_address_notes(&self, params: &NoteParameters) -> Result<Vec<AddressNote>> {
        let address = self
            .get_address(&AddressParameters {
                route_id: params.route_id.clone(),
                route_destination_id: params.address_id,
                notes: Some(true),
                ..Default::default()
            })
            .await?;
        Ok(address.notes.unwrap_or_default())
    }

    /// Adds a text note to a destination.
    ///
    /// The note type is `params.activity_type`, or `unclassified` when unset.
    pub async fn add_address_note(&self, params: &NoteParameters, contents: &str) -> Result<AddressNote> {
        let request = ApiRequest::post(endpoints::ROUTE_NOTES)
            .query(params)?
            .form([
                ("strUpdateType", params.update_type()),
                ("strNoteContents", contents),
            ]);
        self.submit_note(request).await
    }

    /// Adds a note with a file attachment to a destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attachment`] if the file cannot be read.
    pub async fn add_address_note_with_file(
        &self,
        params: &NoteParameters,
        contents: &str,
        attachment: impl AsRef<Path>,
    ) -> Result<AddressNote> {
        let path = attachment.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(Error::Attachment)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let form = MultipartForm::new()
            .file("strFilename", file_name, bytes)
            .text("strUpdateType", params.update_type())
            .text("strNoteContents", contents);
        let request = ApiRequest::post(endpoints::ROUTE_NOTES)
            .query(params)?
            .multipart(form);
        self.submit_note(request).await
    }

    async fn submit_note(&self, request: ApiRequest) -> Result<AddressNote> {
        let response = self.call::<NoteResponse>(request).await?.data;
        response.note.ok_or_else(|| rejected("Note not added"))
    }

    /// Adds a note built from custom note type values, as `(type, value)`
    /// pairs.
    pub async fn add_custom_note_to_route(
        &self,
        params: &NoteParameters,
        custom_notes: &[(String, String)],
    ) -> Result<AddressNote> {
        let request = ApiRequest::post(endpoints::ROUTE_NOTES)
            .query(params)?
            .form(custom_notes.iter().cloned());
        let response = self.call::<NoteResponse>(request).await?.data;
        let failure = "Can not add custom note to the route";
        ensure(response.status, failure)?;
        response.note.ok_or_else(|| rejected(failure))
    }

    /// Creates a custom note type and returns the number of affected rows.
    pub async fn add_custom_note_type(&self, note_type: &str, values: &[String]) -> Result<u64> {
        let request = ApiRequest::post(endpoints::CUSTOM_NOTE_TYPE)
            .json(&NewCustomNoteType { note_type, values })?;
        custom_note_type_outcome(self.call(request).await?.data)
    }

    pub async fn remove_custom_note_type(&self, note_custom_type_id: i64) -> Result<u64> {
        #[derive(Serialize)]
        struct Body {
            id: i64,
        }

        let request = ApiRequest::delete(endpoints::CUSTOM_NOTE_TYPE).json(&Body {
            id: note_custom_type_id,
        })?;
        custom_note_type_outcome(self.call(request).await?.data)
    }

    pub async fn get_all_custom_note_types(&self) -> Result<Vec<CustomNoteType>> {
        let request = ApiRequest::get(endpoints::CUSTOM_NOTE_TYPE);
        Ok(self.call(request).await?.data)
    }
}

fn custom_note_type_outcome(result: CustomNoteTypeResult) -> Result<u64> {
    ensure(
        result.result == "OK",
        &format!("Custom note type request failed: {}", result.result),
    )?;
    Ok(result.affected)
}
