//! Service request and response messages.

mod common;
mod session;

pub use common::*;
pub use session::*;

use std::sync::LazyLock;

use paste::paste;

use crate::{NodeId, XmlEncodingId};

/// Static metadata describing a service message type
pub trait ServiceMessage {
    /// The message's data type name
    const TYPE_NAME: &'static str;
    /// Numeric id of the DefaultBinary encoding node in namespace 0
    const BINARY_ENCODING_ID: u32;
    /// Id of the DefaultXml encoding node in the expanded node id text form
    const XML_ENCODING_ID: &'static str;

    fn binary_encoding_id() -> NodeId {
        NodeId::numeric(0, Self::BINARY_ENCODING_ID)
    }

    /// The DefaultXml encoding id, parsed from [ServiceMessage::XML_ENCODING_ID] on first use
    fn xml_encoding_id() -> &'static XmlEncodingId;
}

macro_rules! impl_service_message {
    ($type:ident, $binary_id:literal, $xml_id:literal) => {
        impl ServiceMessage for $type {
            const TYPE_NAME: &'static str = stringify!($type);
            const BINARY_ENCODING_ID: u32 = $binary_id;
            const XML_ENCODING_ID: &'static str = $xml_id;

            fn xml_encoding_id() -> &'static XmlEncodingId {
                static ID: LazyLock<XmlEncodingId> = LazyLock::new(|| {
                    XmlEncodingId::new($xml_id).unwrap_or_else(|e| {
                        panic!("invalid XML encoding id for {}: {e}", stringify!($type))
                    })
                });
                &ID
            }
        }
    };
}

impl_service_message!(CreateSessionRequest, 461, "i=460");
impl_service_message!(CreateSessionResponse, 464, "i=463");
impl_service_message!(ActivateSessionRequest, 467, "i=466");
impl_service_message!(ActivateSessionResponse, 470, "i=469");
impl_service_message!(CloseSessionRequest, 473, "i=472");
impl_service_message!(CloseSessionResponse, 476, "i=475");

/*
  Generates the request and response unions for the listed services, the conversions into them
  and the checked narrowing from a response union back to a concrete response type.
*/
macro_rules! service_set {
    ($($service:ident),* $(,)?) => {
        paste! {
            /// A request to any of the supported services
            #[derive(Clone, Debug, PartialEq)]
            pub enum ServiceRequest {
                $($service([<$service Request>]),)*
            }

            /// A response from any of the supported services
            #[derive(Clone, Debug, PartialEq)]
            pub enum ServiceResponse {
                $($service([<$service Response>]),)*
            }

            impl ServiceRequest {
                pub fn request_header(&self) -> &RequestHeader {
                    match self {
                        $(ServiceRequest::$service(r) => &r.request_header,)*
                    }
                }

                pub fn type_name(&self) -> &'static str {
                    match self {
                        $(ServiceRequest::$service(_) => <[<$service Request>] as ServiceMessage>::TYPE_NAME,)*
                    }
                }
            }

            impl ServiceResponse {
                pub fn response_header(&self) -> &ResponseHeader {
                    match self {
                        $(ServiceResponse::$service(r) => &r.response_header,)*
                    }
                }

                pub fn type_name(&self) -> &'static str {
                    match self {
                        $(ServiceResponse::$service(_) => <[<$service Response>] as ServiceMessage>::TYPE_NAME,)*
                    }
                }
            }

            $(
                impl From<[<$service Request>]> for ServiceRequest {
                    fn from(value: [<$service Request>]) -> Self {
                        ServiceRequest::$service(value)
                    }
                }

                impl From<[<$service Response>]> for ServiceResponse {
                    fn from(value: [<$service Response>]) -> Self {
                        ServiceResponse::$service(value)
                    }
                }

                impl TryFrom<ServiceResponse> for [<$service Response>] {
                    /// The response is handed back untouched when it is of another type
                    type Error = ServiceResponse;

                    fn try_from(value: ServiceResponse) -> Result<Self, Self::Error> {
                        match value {
                            ServiceResponse::$service(r) => Ok(r),
                            #[allow(unreachable_patterns)]
                            other => Err(other),
                        }
                    }
                }
            )*
        }
    };
}

service_set!(CreateSession, ActivateSession, CloseSession);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_encoding_ids_are_valid() {
        assert_eq!(
            CreateSessionRequest::xml_encoding_id().node_id(),
            &NodeId::numeric(0, 460)
        );
        assert_eq!(
            CreateSessionResponse::xml_encoding_id().node_id(),
            &NodeId::numeric(0, 463)
        );
        assert_eq!(
            ActivateSessionRequest::xml_encoding_id().node_id(),
            &NodeId::numeric(0, 466)
        );
        assert_eq!(
            ActivateSessionResponse::xml_encoding_id().node_id(),
            &NodeId::numeric(0, 469)
        );
        assert_eq!(
            CloseSessionRequest::xml_encoding_id().node_id(),
            &NodeId::numeric(0, 472)
        );
        assert_eq!(
            CloseSessionResponse::xml_encoding_id().node_id(),
            &NodeId::numeric(0, 475)
        );
        assert_eq!(
            CloseSessionResponse::binary_encoding_id(),
            NodeId::numeric(0, 476)
        );
    }

    #[test]
    fn xml_encoding_id_is_parsed_once() {
        let first = CloseSessionRequest::xml_encoding_id();
        let second = CloseSessionRequest::xml_encoding_id();
        assert!(std::ptr::eq(first, second));
        assert_eq!(
            first,
            &XmlEncodingId::new(CloseSessionRequest::XML_ENCODING_ID).unwrap()
        );
        assert!(!std::ptr::eq(first, CloseSessionResponse::xml_encoding_id()));
    }

    #[test]
    fn narrowing() {
        let response = ServiceResponse::from(CloseSessionResponse::default());
        assert_eq!(response.type_name(), "CloseSessionResponse");

        let narrowed = CloseSessionResponse::try_from(response.clone()).unwrap();
        assert_eq!(narrowed, CloseSessionResponse::default());

        let mismatch = CreateSessionResponse::try_from(response.clone()).unwrap_err();
        assert_eq!(mismatch, response);
    }

    #[test]
    fn request_header_access() {
        let mut request = ActivateSessionRequest::default();
        request.request_header.request_handle = 9;
        let request = ServiceRequest::from(request);
        assert_eq!(request.request_header().request_handle, 9);
        assert_eq!(request.type_name(), "ActivateSessionRequest");
    }
}
