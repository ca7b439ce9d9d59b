//! Building a [`PaymentRequest`] from the checkout form.

use common_enums::{AmountPolicy, PaymentMethodKey};
use common_utils::{ext_traits::FormValueExt, types::MinorUnit};
use error_stack::{report, ResultExt};
use hyperswitch_masking::Secret;
use serde::Deserialize;
use time::{macros::format_description, Date, Month};

use crate::{
    basket::BasketSnapshot,
    errors::IntentError,
    payments::{CardData, GooglePayData, PaymentMethodData, PaymentRequest, SepaAccount},
    utils::ForeignTryFrom,
};

/// Fields posted by the storefront payment forms. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentForm {
    pub nn_payment_key: Option<String>,
    pub nn_order_amount: Option<String>,
    pub nn_sepa_iban: Option<String>,
    pub nn_sepa_bic: Option<String>,
    pub nn_pan_hash: Option<String>,
    pub nn_unique_id: Option<String>,
    pub nn_cc3d_redirect: Option<String>,
    pub nn_google_pay_token: Option<String>,
    pub nn_google_pay_do_redirect: Option<String>,
    pub nn_show_dob: Option<String>,
    pub nn_guarantee_year: Option<String>,
    pub nn_guarantee_month: Option<String>,
    pub nn_guarantee_date: Option<String>,
    #[serde(rename = "nn_reinitializePayment")]
    pub nn_reinitialize_payment: Option<String>,
}

impl PaymentForm {
    pub fn payment_method_key(
        &self,
    ) -> Result<PaymentMethodKey, error_stack::Report<IntentError>> {
        let key = self
            .nn_payment_key
            .non_empty()
            .ok_or(IntentError::MissingRequiredField {
                field_name: "nn_payment_key",
            })?;
        key.parse::<PaymentMethodKey>()
            .change_context(IntentError::UnknownPaymentMethod(key.to_string()))
    }

    pub fn reinitialize_payment(&self) -> bool {
        self.nn_reinitialize_payment.is_truthy()
    }
}

/// Merchant settings that shape every payment request.
#[derive(Debug, Clone)]
pub struct IntentSettings {
    pub amount_policy: AmountPolicy,
    pub return_url: String,
    pub lang: String,
    pub test_mode: bool,
}

impl ForeignTryFrom<(&BasketSnapshot, &PaymentForm, &IntentSettings)> for PaymentRequest {
    type Error = error_stack::Report<IntentError>;

    fn foreign_try_from(
        (basket, form, settings): (&BasketSnapshot, &PaymentForm, &IntentSettings),
    ) -> Result<Self, Self::Error> {
        let payment_method_key = form.payment_method_key()?;
        let amount = order_amount(form, settings.amount_policy)?;
        let method_data = method_data(payment_method_key, form)?;
        let return_url = method_data
            .is_redirect_based()
            .then(|| settings.return_url.clone());

        Ok(Self {
            payment_method_key,
            amount,
            currency: basket.currency.clone(),
            customer: basket.customer.clone(),
            method_data,
            return_url,
            lang: settings.lang.clone(),
            test_mode: settings.test_mode,
            order_no: basket.order_no.clone(),
        })
    }
}

fn order_amount(
    form: &PaymentForm,
    policy: AmountPolicy,
) -> Result<MinorUnit, error_stack::Report<IntentError>> {
    let parsed = form
        .nn_order_amount
        .non_empty()
        .map(MinorUnit::from_minor_unit_str);
    match (parsed, policy) {
        (Some(Ok(amount)), _) => Ok(amount),
        (_, AmountPolicy::DefaultToZero) => Ok(MinorUnit::zero()),
        (None, AmountPolicy::Reject) => Err(report!(IntentError::InvalidOrderAmount)),
        (Some(Err(error)), AmountPolicy::Reject) => {
            Err(error.change_context(IntentError::InvalidOrderAmount))
        }
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field_name: &'static str,
) -> Result<&'a str, error_stack::Report<IntentError>> {
    value
        .non_empty()
        .ok_or_else(|| report!(IntentError::MissingRequiredField { field_name }))
}

fn sepa_account(form: &PaymentForm) -> Result<SepaAccount, error_stack::Report<IntentError>> {
    let iban = required(&form.nn_sepa_iban, "nn_sepa_iban")?;
    Ok(SepaAccount {
        iban: Secret::new(iban.replace(' ', "").to_uppercase()),
        bic: form
            .nn_sepa_bic
            .non_empty()
            .map(|bic| Secret::new(bic.to_string())),
    })
}

/// `YYYY-MM-DD`, only when the shop asked for the birth date.
fn birth_date(form: &PaymentForm) -> Result<Option<String>, error_stack::Report<IntentError>> {
    if !form.nn_show_dob.is_truthy() {
        return Ok(None);
    }
    let number = |value: &Option<String>, field_name: &'static str| {
        required(value, field_name)?
            .parse::<i32>()
            .change_context(IntentError::InvalidFieldValue { field_name })
    };
    let year = number(&form.nn_guarantee_year, "nn_guarantee_year")?;
    let month = number(&form.nn_guarantee_month, "nn_guarantee_month")?;
    let day = number(&form.nn_guarantee_date, "nn_guarantee_date")?;

    let month = u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .ok_or_else(|| {
            report!(IntentError::InvalidFieldValue {
                field_name: "nn_guarantee_month"
            })
        })?;
    let day = u8::try_from(day).change_context(IntentError::InvalidFieldValue {
        field_name: "nn_guarantee_date",
    })?;
    let date = Date::from_calendar_date(year, month, day).change_context(
        IntentError::InvalidFieldValue {
            field_name: "nn_guarantee_date",
        },
    )?;
    date.format(format_description!("[year]-[month]-[day]"))
        .map(Some)
        .change_context(IntentError::InvalidFieldValue {
            field_name: "nn_guarantee_date",
        })
}

fn method_data(
    key: PaymentMethodKey,
    form: &PaymentForm,
) -> Result<PaymentMethodData, error_stack::Report<IntentError>> {
    Ok(match key {
        PaymentMethodKey::Sepa => PaymentMethodData::Sepa(sepa_account(form)?),
        PaymentMethodKey::GuaranteedSepa => PaymentMethodData::GuaranteedSepa {
            account: sepa_account(form)?,
            birth_date: birth_date(form)?,
        },
        PaymentMethodKey::Invoice => PaymentMethodData::Invoice,
        PaymentMethodKey::GuaranteedInvoice => PaymentMethodData::GuaranteedInvoice {
            birth_date: birth_date(form)?,
        },
        PaymentMethodKey::Prepayment => PaymentMethodData::Prepayment,
        PaymentMethodKey::Card => PaymentMethodData::Card(CardData {
            pan_hash: Secret::new(required(&form.nn_pan_hash, "nn_pan_hash")?.to_string()),
            unique_id: required(&form.nn_unique_id, "nn_unique_id")?.to_string(),
            do_redirect: form.nn_cc3d_redirect.is_truthy(),
        }),
        PaymentMethodKey::GooglePay => PaymentMethodData::GooglePay(GooglePayData {
            wallet_token: Secret::new(
                required(&form.nn_google_pay_token, "nn_google_pay_token")?.to_string(),
            ),
            do_redirect: form.nn_google_pay_do_redirect.is_truthy(),
        }),
        PaymentMethodKey::Paypal => PaymentMethodData::Paypal,
        PaymentMethodKey::Ideal => PaymentMethodData::Ideal,
        PaymentMethodKey::OnlineTransfer => PaymentMethodData::OnlineTransfer,
    })
}
