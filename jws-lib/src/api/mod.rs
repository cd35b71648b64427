use serde::de::DeserializeOwned;

pub(crate) mod health;
pub(crate) mod works;

pub trait Client
where
    Self: Default,
{
    fn get_response(&self, url: &str) -> Result<HttpResponse, Error>;
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

/// Status code and raw body of a response, kept together so that callers can apply endpoint
/// specific rules to non-success bodies.
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    pub(crate) fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub(crate) const fn status(&self) -> u16 {
        self.status
    }

    pub(crate) const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }
}

impl Client for reqwest::blocking::Client {
    fn get_response(&self, url: &str) -> Result<HttpResponse, Error> {
        let resp = self
            .get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        Ok(HttpResponse::new(status, body))
    }

    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_response_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};

#[cfg(test)]
mod test {

    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Option<String>> = std::cell::RefCell::new(None);
    }

    /// Asserts that the expected URL is the same as the one provided to the [`MockClient`].
    ///
    /// The [`MockClient`] will update the static thread local `URL_SINK` with the URL string that
    /// was passed to it, this allows for asserting that implementing functions or methods are
    /// parsing the correct URL.
    ///
    /// This macro provides a shortcut alternative to the following:
    ///
    /// ```ignore
    /// // .. test code including `MockClient`
    ///
    /// let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
    /// assert_eq!("expected url here", url);
    /// ```
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<HttpResponse> = EmptyResponseProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<HttpResponse>> Client for MockClient<P> {
        fn get_response(&self, url: &str) -> Result<HttpResponse, Error> {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_owned()));
            P::produce()
        }

        fn get_json<T>(&self, url: &str) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_owned()));
            P::produce().and_then(|resp| resp.json())
        }
    }

    macro_rules! impl_response_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<crate::api::HttpResponse> for $producer {
                    fn produce() -> Result<crate::api::HttpResponse, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_response_producer! {
        EmptyResponseProducer => Ok(HttpResponse::new(200, "")),
        NetworkErrorProducer => Err(Error::new(ErrorKind::IO, "Network error")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_response_producer;
}
