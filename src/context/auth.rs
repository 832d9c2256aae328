use super::kind::{AnyKind, Kind, NumberKind, StringKind};
use super::value::{BooleanValue, NumberValue, StringValue, Value};
use crate::{Chain, Element, Expression, Member};
use std::fmt;

/// The `auth` variable. Renders as `auth`, which is `null` for
/// unauthenticated requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Auth {
    chain: Chain,
}

impl Auth {
    pub(crate) fn from_chain(chain: Chain) -> Self {
        Auth { chain }
    }

    /// Sign-in method (`password`, `anonymous`, `google.com`, ...).
    pub fn provider(self) -> StringValue {
        Value::from_chain(self.chain.branch(Member::property("provider")))
    }

    pub fn uid(self) -> StringValue {
        Value::from_chain(self.chain.branch(Member::property("uid")))
    }

    /// Contents of the ID token.
    pub fn token(self) -> AuthToken {
        AuthToken { chain: self.chain.branch(Member::property("token")) }
    }
}

/// The `auth.token` claims.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    chain: Chain,
}

impl AuthToken {
    fn claim<K: Kind>(self, name: &str) -> Value<K> {
        Value::from_chain(self.chain.append(Member::property(name)))
    }

    pub fn email(self) -> StringValue {
        self.claim("email")
    }

    pub fn email_verified(self) -> BooleanValue {
        self.claim("email_verified")
    }

    pub fn phone_number(self) -> StringValue {
        self.claim("phone_number")
    }

    pub fn name(self) -> StringValue {
        self.claim("name")
    }

    pub fn sub(self) -> StringValue {
        self.claim("sub")
    }

    /// Map of identity provider to the identifiers linked with the account.
    pub fn firebase_identities(self) -> Value<AnyKind> {
        self.claim("firebase.identities")
    }

    pub fn firebase_sign_in_provider(self) -> StringValue {
        self.claim::<StringKind>("firebase.sign_in_provider")
    }

    pub fn iss(self) -> StringValue {
        self.claim("iss")
    }

    pub fn aud(self) -> StringValue {
        self.claim("aud")
    }

    pub fn auth_time(self) -> NumberValue {
        self.claim("auth_time")
    }

    pub fn iat(self) -> NumberValue {
        self.claim::<NumberKind>("iat")
    }

    pub fn exp(self) -> NumberValue {
        self.claim("exp")
    }
}

impl fmt::Display for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl Expression for Auth {
    fn into_element(self) -> Element {
        Element::Chain(self.chain)
    }
}

impl Expression for AuthToken {
    fn into_element(self) -> Element {
        Element::Chain(self.chain)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth;

    #[test]
    fn auth_members() {
        assert_eq!(auth().provider().to_string(), "auth.provider");
        assert_eq!(auth().uid().to_string(), "auth.uid");
        assert_eq!(auth().token().to_string(), "auth.token");
    }

    #[test]
    fn token_claims() {
        assert_eq!(auth().token().email_verified().to_string(), "auth.token.email_verified");
        assert_eq!(auth().token().phone_number().to_string(), "auth.token.phone_number");
        assert_eq!(auth().token().sub().to_string(), "auth.token.sub");
        assert_eq!(auth().token().firebase_identities().to_string(), "auth.token.firebase.identities");
        assert_eq!(
            auth().token().firebase_sign_in_provider().to_string(),
            "auth.token.firebase.sign_in_provider"
        );
        assert_eq!(auth().token().iss().to_string(), "auth.token.iss");
        assert_eq!(auth().token().aud().to_string(), "auth.token.aud");
        assert_eq!(auth().token().auth_time().to_string(), "auth.token.auth_time");
        assert_eq!(auth().token().iat().to_string(), "auth.token.iat");
        assert_eq!(auth().token().exp().to_string(), "auth.token.exp");
    }

    #[test]
    fn claims_continue_into_operators() {
        let rule = auth().token().email_verified().equal().evaluate(true);
        assert_eq!(rule.to_string(), "auth.token.email_verified === true");

        let rule = auth().token().exp().greater_than().now();
        assert_eq!(rule.to_string(), "auth.token.exp > now");
    }
}
