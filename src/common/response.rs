// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Infrastructure types related to packaging rate-limit information alongside responses from
//! Twitter.

use std::iter::FromIterator;
use std::vec;

use crate::common::Headers;
use crate::service::RateLimitStatus;

///A helper struct to wrap response data with accompanying rate limit information.
///
///This is returned by every facade method that hits the API, so that the rate-limit counters
///reported by the server are always on hand. The wrapper derefs to its payload, so a
///`Response<Vec<T>>` can be indexed, sliced and iterated like the Vec inside it.
#[derive(Debug, derive_more::Deref, derive_more::DerefMut)]
pub struct Response<T> {
    ///The rate limit information attached to this response, if the server reported any.
    pub rate_limit_status: Option<RateLimitStatus>,
    ///The decoded response from the request.
    #[deref]
    #[deref_mut]
    pub response: T,
}

///An ordered collection of entities with attached rate-limit information.
pub type ResponseList<T> = Response<Vec<T>>;

impl<T> Response<T> {
    ///Wrap the given payload with rate-limit information read from the given headers.
    pub fn from_headers(headers: &Headers, response: T) -> Response<T> {
        Response {
            rate_limit_status: RateLimitStatus::from_headers(headers),
            response,
        }
    }

    ///Convert a `Response<T>` to a `Response<U>` by running its contained response through the
    ///given function. This preserves its attached rate-limit information.
    pub fn map<F, U>(self, fun: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            rate_limit_status: self.rate_limit_status,
            response: fun(self.response),
        }
    }
}

///Iterator returned by calling `.into_iter()` on a `Response<Vec<T>>`.
///
///Each item is paired with a copy of the parent response's rate-limit information.
pub struct ResponseIter<T> {
    rate_limit_status: Option<RateLimitStatus>,
    resp_iter: vec::IntoIter<T>,
}

impl<T> Iterator for ResponseIter<T> {
    type Item = Response<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.resp_iter.next().map(|resp| Response {
            rate_limit_status: self.rate_limit_status.clone(),
            response: resp,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.resp_iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for ResponseIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.resp_iter.next_back().map(|resp| Response {
            rate_limit_status: self.rate_limit_status.clone(),
            response: resp,
        })
    }
}

impl<T> ExactSizeIterator for ResponseIter<T> {
    fn len(&self) -> usize {
        self.resp_iter.len()
    }
}

impl<T> IntoIterator for Response<Vec<T>> {
    type Item = Response<T>;
    type IntoIter = ResponseIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        ResponseIter {
            rate_limit_status: self.rate_limit_status,
            resp_iter: self.response.into_iter(),
        }
    }
}

impl<T> FromIterator<Response<T>> for Response<Vec<T>> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Response<T>>,
    {
        let mut resp = Response {
            rate_limit_status: None,
            response: Vec::new(),
        };

        for item in iter {
            // keep the most pessimistic counters seen: the latest reset window, and within it
            // the fewest remaining hits
            if let Some(status) = item.rate_limit_status {
                let keep = match &resp.rate_limit_status {
                    None => true,
                    Some(current) => {
                        status.reset_time > current.reset_time
                            || (status.reset_time == current.reset_time
                                && status.remaining_hits < current.remaining_hits)
                    }
                };
                if keep {
                    resp.rate_limit_status = Some(status);
                }
            }
            resp.response.push(item.response);
        }

        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn status(remaining: i32, reset_offset: i64) -> RateLimitStatus {
        let reset_time = Utc::now() + Duration::seconds(reset_offset);
        RateLimitStatus {
            hourly_limit: 150,
            remaining_hits: remaining,
            reset_time_in_seconds: reset_offset as i32,
            reset_time,
        }
    }

    #[test]
    fn list_round_trips_through_iteration() {
        let list = Response {
            rate_limit_status: Some(status(10, 60)),
            response: vec![1, 2, 3],
        };

        let collected: Response<Vec<i32>> = list.into_iter().collect();
        assert_eq!(*collected, vec![1, 2, 3]);
        assert_eq!(collected.rate_limit_status.unwrap().remaining_hits, 10);
    }

    #[test]
    fn from_iter_keeps_pessimistic_counters() {
        let a = Response {
            rate_limit_status: Some(status(12, 60)),
            response: 'a',
        };
        let b = Response {
            rate_limit_status: Some(status(9, 60)),
            response: 'b',
        };
        let c = Response {
            rate_limit_status: None,
            response: 'c',
        };

        let all: Response<Vec<char>> = vec![a, b, c].into_iter().collect();
        assert_eq!(*all, vec!['a', 'b', 'c']);
        assert_eq!(all.rate_limit_status.unwrap().remaining_hits, 9);
    }

    #[test]
    fn from_headers_attaches_counters() {
        use hyper::header::HeaderValue;

        let reset = (Utc::now() + Duration::seconds(60)).timestamp().to_string();
        let mut headers = Headers::new();
        headers.insert("X-RateLimit-Limit", HeaderValue::from_static("150"));
        headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("148"));
        headers.insert("X-RateLimit-Reset", HeaderValue::from_str(&reset).unwrap());

        let resp = Response::from_headers(&headers, 42);
        assert_eq!(*resp, 42);
        assert_eq!(resp.rate_limit_status.unwrap().hourly_limit, 150);

        let bare = Response::from_headers(&Headers::new(), 42);
        assert!(bare.rate_limit_status.is_none());
    }

    #[test]
    fn deref_exposes_the_payload() {
        let list = Response {
            rate_limit_status: None,
            response: vec![10u64, 20],
        };

        assert_eq!(list.len(), 2);
        assert_eq!(list[1], 20);
    }
}
