//! Request abstraction consumed by routers.

use http::Method;

/// The parts of an inbound request a router needs.
pub trait Request {
    /// The request path, without query string.
    fn path(&self) -> &str;

    /// The request method.
    fn method(&self) -> &Method;
}

impl<B> Request for http::Request<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn method(&self) -> &Method {
        http::Request::method(self)
    }
}

impl<S: AsRef<str>> Request for (Method, S) {
    fn path(&self) -> &str {
        self.1.as_ref()
    }

    fn method(&self) -> &Method {
        &self.0
    }
}

impl<R: Request + ?Sized> Request for &R {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn method(&self) -> &Method {
        (**self).method()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request() {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/blog/show?page=2")
            .body(())
            .unwrap();

        assert_eq!(Request::path(&req), "/blog/show");
        assert_eq!(*Request::method(&req), Method::POST);
    }

    #[test]
    fn test_tuple_request() {
        let req = (Method::GET, "/about");
        assert_eq!(req.path(), "/about");
        assert_eq!(*req.method(), Method::GET);
    }
}
