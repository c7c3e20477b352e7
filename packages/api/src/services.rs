//! # Entity services
//!
//! One generic service covers every entity family. The REST resource path
//! comes from [`Entity::PATH`], so `client.service::<Gender>()` talks to
//! `/gender`, `client.service::<Address>()` to `/address` and so on.
//!
//! | Method | HTTP |
//! |--------|------|
//! | [`get_all`](EntityService::get_all) | `GET {path}` |
//! | [`get_by_id`](EntityService::get_by_id) | `GET {path}/{id}` |
//! | [`create`](EntityService::create) | `POST {path}` |
//! | [`update`](EntityService::update) | `PUT {path}/{id}` |
//! | [`delete`](EntityService::delete) | `DELETE {path}/{id}` |
//! | [`search`](EntityService::search) | `GET {path}/search?...` |
//!
//! Persons additionally have [`upload_image`](EntityService::upload_image).

use std::marker::PhantomData;

use serde::Deserialize;

use domain::{Address, AddressType, Country, Entity, Gender, PagedResult, Person, SearchQuery, State};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{FileUpload, Transport};

pub struct EntityService<'a, T, E> {
    client: &'a ApiClient<T>,
    _entity: PhantomData<E>,
}

pub type PersonService<'a, T> = EntityService<'a, T, Person>;
pub type AddressService<'a, T> = EntityService<'a, T, Address>;
pub type CountryService<'a, T> = EntityService<'a, T, Country>;
pub type StateService<'a, T> = EntityService<'a, T, State>;
pub type GenderService<'a, T> = EntityService<'a, T, Gender>;
pub type AddressTypeService<'a, T> = EntityService<'a, T, AddressType>;

impl<'a, T: Transport, E: Entity> EntityService<'a, T, E> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", E::PATH, id)
    }

    pub async fn get_all(&self) -> Result<Vec<E>, ApiError> {
        self.client.get(E::PATH, Vec::new()).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<E, ApiError> {
        self.client.get(&Self::item_path(id), Vec::new()).await
    }

    /// Returns the record as stored, with its assigned id.
    pub async fn create(&self, entity: &E) -> Result<E, ApiError> {
        self.client.post(E::PATH, entity).await
    }

    pub async fn update(&self, id: i64, entity: &E) -> Result<(), ApiError> {
        self.client.put(&Self::item_path(id), entity).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&Self::item_path(id)).await
    }

    pub async fn search(&self, query: &SearchQuery<E::Filter>) -> Result<PagedResult<E>, ApiError> {
        let path = format!("{}/search", E::PATH);
        self.client.get(&path, query.to_params()).await
    }
}

#[derive(Debug, Deserialize)]
struct UploadedImage {
    path: String,
}

impl<T: Transport> EntityService<'_, T, Person> {
    /// Upload a profile picture; returns the stored image path.
    pub async fn upload_image(
        &self,
        file_name: &str,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let file = FileUpload {
            field: "file",
            file_name: file_name.to_string(),
            content_type,
            bytes,
        };
        let uploaded: UploadedImage = self
            .client
            .upload(&format!("{}/upload-image", Person::PATH), file)
            .await?;
        Ok(uploaded.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use crate::transport::{Method, RequestBody};
    use domain::{AddressFilter, NoFilter, PagedQuery, StateFilter};

    fn gender(id: i64, code: &str, name: &str) -> Gender {
        Gender {
            id: Some(id),
            code: code.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_crud_paths() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/gender", 200, &vec![gender(1, "M", "Male")]);
        transport.respond(Method::Get, "/gender/1", 200, &gender(1, "M", "Male"));
        transport.respond(Method::Post, "/gender", 201, &gender(2, "F", "Female"));
        transport.respond_raw(Method::Put, "/gender/2", 204, b"");
        transport.respond_raw(Method::Delete, "/gender/2", 204, b"");

        let client = ApiClient::new(transport.clone()).with_token(Some("tok".into()));
        let genders = client.service::<Gender>();

        assert_eq!(genders.get_all().await.unwrap().len(), 1);
        assert_eq!(genders.get_by_id(1).await.unwrap().code, "M");

        let mut draft = gender(0, "F", "Female");
        draft.id = None;
        let created = genders.create(&draft).await.unwrap();
        assert_eq!(created.id, Some(2));

        genders.update(2, &created).await.unwrap();
        genders.delete(2).await.unwrap();

        let sent: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path, r.bearer))
            .collect();
        let token = Some("tok".to_string());
        assert_eq!(
            sent,
            vec![
                (Method::Get, "/gender".to_string(), token.clone()),
                (Method::Get, "/gender/1".to_string(), token.clone()),
                (Method::Post, "/gender".to_string(), token.clone()),
                (Method::Put, "/gender/2".to_string(), token.clone()),
                (Method::Delete, "/gender/2".to_string(), token),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_omits_missing_id() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Post, "/addresstype", 201, &AddressType::default());
        let client = ApiClient::new(transport.clone());
        let address_type = AddressType {
            name: "Home".into(),
            ..Default::default()
        };
        client.service::<AddressType>().create(&address_type).await.unwrap();

        let sent = transport.requests_to(Method::Post, "/addresstype");
        let RequestBody::Json(body) = &sent[0].body else {
            panic!("expected JSON body");
        };
        let value: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Home");
    }

    #[tokio::test]
    async fn test_search_sends_params_in_order() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/address/search",
            200,
            &PagedResult::<Address> {
                items: vec![],
                total_count: 0,
            },
        );
        let client = ApiClient::new(transport.clone());

        let mut query = PagedQuery::new(20);
        query.set_search_term("main");
        query.toggle_sort("city");
        let search = SearchQuery::new(query, AddressFilter { person_id: Some(7) });
        client.service::<Address>().search(&search).await.unwrap();

        let sent = transport.requests_to(Method::Get, "/address/search");
        let keys: Vec<_> = sent[0].query.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["searchTerm", "sortBy", "sortDescending", "pageNumber", "pageSize", "personId"]
        );
        assert_eq!(sent[0].query_value("personId"), Some("7"));
        assert_eq!(sent[0].query_value("pageSize"), Some("20"));
    }

    #[tokio::test]
    async fn test_search_decodes_page() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Get,
            "/state/search",
            200,
            &serde_json::json!({
                "items": [{"id": 4, "code": "CA", "name": "California", "countryId": 1}],
                "totalCount": 51
            }),
        );
        let client = ApiClient::new(transport.clone());
        let search = SearchQuery::new(PagedQuery::new(10), StateFilter { country_id: Some(1) });
        let page = client.service::<State>().search(&search).await.unwrap();
        assert_eq!(page.total_count, 51);
        assert_eq!(page.items[0].name, "California");
        assert_eq!(
            transport.requests()[0].query_value("countryId"),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_search_without_term_or_sort() {
        let transport = MemoryTransport::new();
        transport.respond(Method::Get, "/country/search", 200, &PagedResult::<Country>::default());
        let client = ApiClient::new(transport.clone());
        let search = SearchQuery::new(PagedQuery::new(10), NoFilter);
        client.service::<Country>().search(&search).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.query_value("searchTerm"), None);
        assert_eq!(request.query_value("sortBy"), None);
        assert_eq!(request.query_value("pageNumber"), Some("1"));
    }

    #[tokio::test]
    async fn test_upload_image() {
        let transport = MemoryTransport::new();
        transport.respond(
            Method::Post,
            "/person/upload-image",
            200,
            &serde_json::json!({"path": "/images/abc.png"}),
        );
        let client = ApiClient::new(transport.clone());
        let path = client
            .service::<Person>()
            .upload_image("me.png", Some("image/png".into()), vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(path, "/images/abc.png");

        let sent = transport.requests_to(Method::Post, "/person/upload-image");
        match &sent[0].body {
            RequestBody::File(file) => {
                assert_eq!(file.field, "file");
                assert_eq!(file.file_name, "me.png");
                assert_eq!(file.bytes, vec![1, 2, 3]);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_failure_is_error() {
        let transport = MemoryTransport::new();
        transport.respond_raw(Method::Post, "/person/upload-image", 500, b"boom");
        let client = ApiClient::new(transport);
        let err = client
            .service::<Person>()
            .upload_image("me.png", None, vec![])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
