use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};

/// How a channel is validated, clamped and inverted.
enum Kind {
    Hue,
    Bounded(syn::Expr, syn::Expr),
    Opponent(syn::Expr, syn::Expr),
    Open(syn::Expr, syn::Expr),
}

struct ChannelField {
    ident: syn::Ident,
    ty: syn::Type,
    attrs: Vec<syn::Attribute>,
    kind: Kind,
}

fn parse_kind(field: &syn::Field) -> syn::Result<Kind> {
    let mut kind = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("channel")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("hue") {
                kind = Some(Kind::Hue);
                return Ok(());
            }

            let content;
            syn::parenthesized!(content in meta.input);
            let min: syn::Expr = content.parse()?;
            content.parse::<syn::Token![,]>()?;
            let max: syn::Expr = content.parse()?;

            if meta.path.is_ident("bounded") {
                kind = Some(Kind::Bounded(min, max));
            } else if meta.path.is_ident("opponent") {
                kind = Some(Kind::Opponent(min, max));
            } else if meta.path.is_ident("open") {
                kind = Some(Kind::Open(min, max));
            } else {
                return Err(meta.error("expected `hue`, `bounded`, `opponent` or `open`"));
            }
            Ok(())
        })?;
    }

    kind.ok_or_else(|| {
        syn::Error::new_spanned(field, "every channel needs a `#[channel(...)]` attribute")
    })
}

fn channel_entry(channel: &ChannelField) -> TokenStream2 {
    let name = channel.ident.to_string();
    let (min, max, kind) = match &channel.kind {
        Kind::Hue => (quote!(0.0), quote!(360.0), quote!(Hue)),
        Kind::Bounded(min, max) => (quote!(#min), quote!(#max), quote!(Bounded)),
        Kind::Opponent(min, max) => (quote!(#min), quote!(#max), quote!(Opponent)),
        Kind::Open(min, max) => (quote!(#min), quote!(#max), quote!(Open)),
    };

    quote! {
        crate::Channel {
            name: #name,
            min: #min,
            max: #max,
            kind: crate::ChannelKind::#kind,
        }
    }
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<TokenStream2> {
    let precise = input.attrs.iter().any(|a| a.path().is_ident("precise"));
    input.attrs.retain(|a| !a.path().is_ident("precise"));

    let syn::Fields::Named(named) = &input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "models must use named fields, one for each channel",
        ));
    };

    if !(3..=4).contains(&named.named.len()) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "models must have three or four channels",
        ));
    }

    let channels = named
        .named
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "channels must be named"))?;
            Ok(ChannelField {
                ident,
                ty: field.ty.clone(),
                attrs: field
                    .attrs
                    .iter()
                    .filter(|a| !a.path().is_ident("channel"))
                    .cloned()
                    .collect(),
                kind: parse_kind(field)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let struct_name = &input.ident;
    let struct_attrs = &input.attrs;
    let vis = &input.vis;
    let space_name = struct_name.to_string().to_case(Case::Snake);
    let count = channels.len();

    let fields = channels.iter().map(|c| &c.ident).collect::<Vec<_>>();
    let types = channels.iter().map(|c| &c.ty).collect::<Vec<_>>();
    let field_attrs = channels.iter().map(|c| &c.attrs).collect::<Vec<_>>();
    let indices = (0..count).map(Literal::usize_unsuffixed).collect::<Vec<_>>();
    let entries = channels.iter().map(channel_entry).collect::<Vec<_>>();

    let hue_methods = channels
        .iter()
        .find(|c| matches!(c.kind, Kind::Hue))
        .map(|c| {
            let field = &c.ident;
            quote! {
                fn hue(&self) -> crate::Component {
                    crate::math::normalize_hue(self.#field)
                }

                fn with_hue(&self, hue: crate::Component) -> Self {
                    Self {
                        #field: crate::math::normalize_hue(hue),
                        ..*self
                    }
                }
            }
        });

    // Precise models keep full precision but list whole numbers.
    let to_list = precise.then(|| {
        quote! {
            fn to_list(&self) -> Vec<crate::Component> {
                self.channel_values().map(crate::Component::round).to_vec()
            }
        }
    });

    let getters = channels.iter().map(|c| {
        let field = &c.ident;
        let ty = &c.ty;
        let getter = if precise {
            format_ident!("{}_precise", field)
        } else {
            field.clone()
        };
        let doc = format!(
            " The {} channel of the color.",
            field.to_string().replace('_', " ")
        );
        match c.kind {
            Kind::Hue => quote! {
                #[doc = #doc]
                #[doc = ""]
                #[doc = " Always in `[0, 360)`."]
                pub fn #getter(&self) -> #ty {
                    crate::math::normalize_hue(self.#field)
                }
            },
            _ => quote! {
                #[doc = #doc]
                pub const fn #getter(&self) -> #ty {
                    self.#field
                }
            },
        }
    });

    Ok(quote! {
        #(#struct_attrs)*
        #[derive(Clone, Copy, Debug)]
        #vis struct #struct_name {
            #(
                #(#field_attrs)*
                #fields: #types,
            )*
            alpha: u8,
        }

        impl #struct_name {
            /// The canonical name of this color space.
            pub const NAME: &'static str = #space_name;

            /// The channels of this color space, in list order.
            pub const CHANNELS: [crate::Channel; #count] = [#(#entries),*];

            /// Create a new, fully opaque color, failing if any channel is
            /// out of range.
            pub fn new(#(#fields: #types),*) -> Result<Self, crate::ColorError> {
                Self::from_values(&[#(#fields),*])
            }

            /// Create a new, fully opaque color from its channels in list
            /// order.
            pub fn from_values(values: &[crate::Component]) -> Result<Self, crate::ColorError> {
                crate::color::validate(crate::ColorSpace::#struct_name, &Self::CHANNELS, values)?;
                Ok(Self::from_raw(#(values[#indices],)* 255))
            }

            /// Create a new color from its channels in list order, optionally
            /// followed by an alpha value in `[0, 255]`.
            pub fn from_list(values: &[crate::Component]) -> Result<Self, crate::ColorError> {
                let (values, alpha) =
                    crate::color::split_alpha(crate::ColorSpace::#struct_name, values, #count)?;
                Ok(Self {
                    alpha,
                    ..Self::from_values(values)?
                })
            }

            /// Return a copy of this color with the given channels replaced.
            pub fn copy_with(
                &self,
                #(#fields: Option<#types>,)*
                alpha: Option<u8>,
            ) -> Result<Self, crate::ColorError> {
                let values = [#(#fields.unwrap_or(self.#fields)),*];
                crate::color::validate(crate::ColorSpace::#struct_name, &Self::CHANNELS, &values)?;
                Ok(Self::from_raw(#(values[#indices],)* alpha.unwrap_or(self.alpha)))
            }

            #(#getters)*

            pub(crate) const fn from_raw(#(#fields: #types,)* alpha: u8) -> Self {
                Self {
                    #(#fields,)*
                    alpha,
                }
            }

            pub(crate) const fn channel_values(&self) -> [crate::Component; #count] {
                [#(self.#fields),*]
            }

            pub(crate) fn from_clamped(values: [crate::Component; #count], alpha: u8) -> Self {
                Self::from_raw(#(Self::CHANNELS[#indices].clamp(values[#indices]),)* alpha)
            }

            pub(crate) fn clamped_with(&self, values: &[crate::Component], alpha: u8) -> Self {
                let current = self.channel_values();
                Self::from_clamped(
                    std::array::from_fn(|i| values.get(i).copied().unwrap_or(current[i])),
                    alpha,
                )
            }
        }

        impl From<#struct_name> for crate::Color {
            fn from(value: #struct_name) -> Self {
                crate::Color::#struct_name(value)
            }
        }

        impl crate::ColorModel for #struct_name {
            fn space(&self) -> crate::ColorSpace {
                crate::ColorSpace::#struct_name
            }

            fn alpha(&self) -> u8 {
                self.alpha
            }

            fn to_precise_list(&self) -> Vec<crate::Component> {
                self.channel_values().to_vec()
            }

            fn with_values(&self, values: &[crate::Component], alpha: u8) -> Self {
                self.clamped_with(values, alpha)
            }

            fn to_rgb(&self) -> crate::Rgb {
                self.convert_to_rgb()
            }

            fn from_color(color: &crate::Color) -> Self {
                match color {
                    crate::Color::#struct_name(model) => *model,
                    color => Self::from_rgb(&crate::ColorModel::to_rgb(color)),
                }
            }

            #to_list

            #hue_methods
        }

        impl<M: crate::ColorModel> PartialEq<M> for #struct_name {
            fn eq(&self, other: &M) -> bool {
                crate::models::equals(self, other)
            }
        }

        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(", Self::NAME)?;
                for value in crate::ColorModel::to_list(self) {
                    write!(f, "{value}, ")?;
                }
                write!(f, "{})", self.alpha)
            }
        }
    })
}

/// Generate a color model from a struct describing its channels. Every field
/// is one channel and carries a `#[channel(...)]` attribute: `hue`,
/// `bounded(min, max)`, `opponent(min, max)` or `open(min, max)`. A
/// `#[precise]` attribute on the struct suffixes the channel accessors with
/// `_precise` and makes the listed channels round to whole numbers.
///
/// The generated `ColorModel` implementation converts through the `from_rgb`
/// and `convert_to_rgb` functions every model provides. A `hue` channel is
/// reported in `[0, 360)`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
