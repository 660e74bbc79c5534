/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// HTTP client base: session, request parameters and buffered responses
pub mod http;
/// MailHog pages and activation mails
pub mod mail;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Poll configuration and the clock seam
pub mod retry;
