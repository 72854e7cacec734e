//! Continuation-token pagination (mechanics only).
//!
//! Paginated list operations return a `NextToken`; the caller re-issues the same
//! request with that token until the service stops returning one. This module
//! models the convention without doing any I/O: the caller supplies the fetch.

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::error::PaginationError;
use crate::value_object::ValueObject;

/// A list request that accepts a continuation token.
pub trait PaginatedRequest: ValueObject {
    fn next_token(&self) -> Option<&str>;

    /// Copy of this request positioned at `token` (`None` restarts from the first page).
    fn with_next_token(&self, token: Option<String>) -> Self;

    /// Copy of this request asking for at most `size` results per page.
    fn with_page_size(&self, size: i32) -> Self;
}

/// A list response carrying one page of results.
pub trait PaginatedResponse: ValueObject {
    type Item;

    /// Token for the next page; absent (or empty) on the last page.
    fn next_token(&self) -> Option<&str>;

    fn items(&self) -> &[Self::Item];

    fn into_items(self) -> Vec<Self::Item>;
}

/// Paginator configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PaginatorConfig {
    /// Page size applied to the first request (left untouched when `None`).
    pub page_size: Option<i32>,
    /// Stop after this many pages.
    pub max_pages: Option<usize>,
}

impl PaginatorConfig {
    pub fn with_page_size(mut self, size: i32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = Some(pages);
        self
    }
}

/// Iterator over the pages of a paginated operation.
///
/// Each call to `next()` performs one fetch. Iteration ends when the response has
/// no continuation token, when `max_pages` is reached, or after the first error.
/// A page that repeats an earlier token is still yielded; the
/// [`PaginationError::RepeatedToken`] follows it on the next call.
///
/// ```ignore
/// let pages = Paginator::new(request, |req| client.describe_instances(req));
/// for page in pages {
///     for reservation in page?.into_items() { /* ... */ }
/// }
/// ```
pub struct Paginator<Req, Resp, E, F> {
    next_request: Option<Req>,
    fetch: F,
    config: PaginatorConfig,
    pages: usize,
    seen_tokens: HashSet<String>,
    repeated_token: Option<String>,
    _marker: PhantomData<fn() -> (Resp, E)>,
}

impl<Req, Resp, E, F> Paginator<Req, Resp, E, F>
where
    Req: PaginatedRequest,
    Resp: PaginatedResponse,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    pub fn new(request: Req, fetch: F) -> Self {
        Self::with_config(request, PaginatorConfig::default(), fetch)
    }

    pub fn with_config(request: Req, config: PaginatorConfig, fetch: F) -> Self {
        let request = match config.page_size {
            Some(size) => request.with_page_size(size),
            None => request,
        };

        let mut seen_tokens = HashSet::new();
        if let Some(token) = request.next_token() {
            seen_tokens.insert(token.to_owned());
        }

        Self {
            next_request: Some(request),
            fetch,
            config,
            pages: 0,
            seen_tokens,
            repeated_token: None,
            _marker: PhantomData,
        }
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// Drain every page and concatenate the items, stopping at the first error.
    pub fn collect_items(self) -> Result<Vec<Resp::Item>, PaginationError<E>> {
        let mut items = Vec::new();
        for page in self {
            items.extend(page?.into_items());
        }
        Ok(items)
    }
}

impl<Req, Resp, E, F> Iterator for Paginator<Req, Resp, E, F>
where
    Req: PaginatedRequest,
    Resp: PaginatedResponse,
    F: FnMut(&Req) -> Result<Resp, E>,
{
    type Item = Result<Resp, PaginationError<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.repeated_token.take() {
            return Some(Err(PaginationError::RepeatedToken(token)));
        }

        if let Some(max) = self.config.max_pages {
            if self.pages >= max {
                if self.next_request.take().is_some() {
                    tracing::warn!(
                        shape = Req::SHAPE_NAME,
                        max_pages = max,
                        "page limit reached before the last page"
                    );
                }
                return None;
            }
        }

        let request = self.next_request.take()?;

        let response = match (self.fetch)(&request) {
            Ok(response) => response,
            Err(e) => return Some(Err(PaginationError::Fetch(e))),
        };
        self.pages += 1;

        tracing::debug!(
            shape = Req::SHAPE_NAME,
            page = self.pages,
            items = response.items().len(),
            "fetched page"
        );

        match response.next_token() {
            None | Some("") => {}
            Some(token) => {
                if !self.seen_tokens.insert(token.to_owned()) {
                    tracing::warn!(shape = Req::SHAPE_NAME, token, "continuation token repeated");
                    self.repeated_token = Some(token.to_owned());
                    return Some(Ok(response));
                }
                self.next_request = Some(request.with_next_token(Some(token.to_owned())));
            }
        }

        Some(Ok(response))
    }
}

/// Wire a request/result pair into [`PaginatedRequest`] / [`PaginatedResponse`].
///
/// Both shapes must be declared in the invoking module with `next_token` fields,
/// and the request with a `max_results` field.
///
/// ```ignore
/// paginated! {
///     DescribeInstancesRequest => DescribeInstancesResult { items: reservations: Reservation }
/// }
/// ```
#[macro_export]
macro_rules! paginated {
    ($request:ident => $response:ident { items: $items:ident : $item:ty }) => {
        impl $crate::paginate::PaginatedRequest for $request {
            fn next_token(&self) -> ::core::option::Option<&str> {
                $request::next_token(self)
            }

            fn with_next_token(&self, token: ::core::option::Option<::std::string::String>) -> Self {
                self.to_builder().set_next_token(token).build()
            }

            fn with_page_size(&self, size: i32) -> Self {
                self.to_builder().set_max_results(::core::option::Option::Some(size)).build()
            }
        }

        impl $crate::paginate::PaginatedResponse for $response {
            type Item = $item;

            fn next_token(&self) -> ::core::option::Option<&str> {
                $response::next_token(self)
            }

            fn items(&self) -> &[$item] {
                $response::$items(self).unwrap_or(&[])
            }

            fn into_items(self) -> ::std::vec::Vec<$item> {
                self.$items.unwrap_or_default()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::shape! {
        pub struct ListThingsRequest => ListThingsRequestBuilder {
            string next_token, set_next_token: String => "NextToken";
            copy max_results, set_max_results: i32 => "MaxResults";
        }
    }

    crate::shape! {
        pub struct ListThingsResult => ListThingsResultBuilder {
            list things, set_things, extend_things: String => "Things";
            string next_token, set_next_token: String => "NextToken";
        }
    }

    crate::paginated! {
        ListThingsRequest => ListThingsResult { items: things: String }
    }

    /// Serves `pages` in order, keyed by the incoming token.
    fn service(
        pages: Vec<(Option<&'static str>, Vec<&'static str>, Option<&'static str>)>,
    ) -> impl FnMut(&ListThingsRequest) -> Result<ListThingsResult, String> {
        move |req: &ListThingsRequest| {
            let (_, items, next) = pages
                .iter()
                .find(|(token, _, _)| *token == req.next_token())
                .ok_or_else(|| format!("no page for {:?}", req.next_token()))?;
            Ok(ListThingsResult::builder()
                .extend_things(items.iter().copied())
                .set_next_token(next.map(str::to_string))
                .build())
        }
    }

    #[test]
    fn walks_every_page_until_token_is_absent() {
        let fetch = service(vec![
            (None, vec!["a", "b"], Some("t1")),
            (Some("t1"), vec!["c"], Some("t2")),
            (Some("t2"), vec!["d"], None),
        ]);

        let items = Paginator::new(ListThingsRequest::default(), fetch)
            .collect_items()
            .unwrap();
        assert_eq!(items, ["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_token_ends_iteration() {
        let fetch = service(vec![(None, vec!["a"], Some(""))]);
        let pages: Vec<_> = Paginator::new(ListThingsRequest::default(), fetch).collect();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_ok());
    }

    #[test]
    fn page_size_is_applied_to_requests() {
        let mut sizes = Vec::new();
        let fetch = |req: &ListThingsRequest| -> Result<ListThingsResult, String> {
            sizes.push(req.max_results());
            Ok(ListThingsResult::builder()
                .things("x")
                .set_next_token(req.next_token().is_none().then(|| "t1".to_string()))
                .build())
        };

        let config = PaginatorConfig::default().with_page_size(5);
        let pages = Paginator::with_config(ListThingsRequest::default(), config, fetch).count();
        assert_eq!(pages, 2);
        assert_eq!(sizes, [Some(5), Some(5)]);
    }

    #[test]
    fn max_pages_caps_the_walk() {
        let fetch = service(vec![
            (None, vec!["a"], Some("t1")),
            (Some("t1"), vec!["b"], Some("t2")),
            (Some("t2"), vec!["c"], None),
        ]);

        let config = PaginatorConfig::default().with_max_pages(2);
        let mut pager = Paginator::with_config(ListThingsRequest::default(), config, fetch);
        assert!(pager.next().is_some());
        assert!(pager.next().is_some());
        assert!(pager.next().is_none());
        assert_eq!(pager.pages_fetched(), 2);
    }

    #[test]
    fn repeated_token_is_an_error() {
        let fetch = service(vec![
            (None, vec!["a"], Some("t1")),
            (Some("t1"), vec!["b"], Some("t1")),
        ]);

        let err = Paginator::new(ListThingsRequest::default(), fetch)
            .collect_items()
            .unwrap_err();
        assert_eq!(err, PaginationError::RepeatedToken("t1".to_string()));
    }

    #[test]
    fn page_with_repeated_token_is_delivered_before_the_error() {
        let mut calls = 0;
        let fetch = |_: &ListThingsRequest| -> Result<ListThingsResult, String> {
            calls += 1;
            Ok(ListThingsResult::builder()
                .things(format!("item-{calls}"))
                .next_token("t1")
                .build())
        };

        let mut pager = Paginator::new(ListThingsRequest::default(), fetch);
        let first = pager.next().unwrap().unwrap();
        assert_eq!(first.items(), ["item-1"]);
        let second = pager.next().unwrap().unwrap();
        assert_eq!(second.items(), ["item-2"]);
        assert_eq!(
            pager.next(),
            Some(Err(PaginationError::RepeatedToken("t1".to_string())))
        );
        assert!(pager.next().is_none());
        assert_eq!(pager.pages_fetched(), 2);
    }

    #[test]
    fn fetch_errors_stop_iteration() {
        let fetch = service(vec![(None, vec!["a"], Some("missing"))]);

        let mut pager = Paginator::new(ListThingsRequest::default(), fetch);
        assert!(matches!(pager.next(), Some(Ok(_))));
        assert!(matches!(pager.next(), Some(Err(PaginationError::Fetch(_)))));
        assert!(pager.next().is_none());
    }

    #[test]
    fn resumes_from_a_caller_supplied_token() {
        let fetch = service(vec![
            (None, vec!["a"], Some("t1")),
            (Some("t1"), vec!["b"], None),
        ]);

        let request = ListThingsRequest::builder().next_token("t1").build();
        let items = Paginator::new(request, fetch).collect_items().unwrap();
        assert_eq!(items, ["b"]);
    }
}
