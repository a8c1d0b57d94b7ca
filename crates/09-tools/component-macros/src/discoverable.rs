//! 类型发现宏实现

use crate::utils::{generate_unique_ident, is_public, to_snake_case};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::Parse, parse::ParseStream, punctuated::Punctuated, Ident, Item, Path, Result, Token,
};

/// 类型发现参数
#[derive(Debug, Clone, Default)]
pub struct DiscoverableArgs {
    /// 声明实现的接口
    pub implements: Vec<Path>,
    /// 是否为抽象类型
    pub is_abstract: bool,
}

impl Parse for DiscoverableArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = Self::default();

        while !input.is_empty() {
            if input.peek(Token![abstract]) {
                input.parse::<Token![abstract]>()?;
                args.is_abstract = true;
            } else {
                let ident: Ident = input.parse()?;
                if ident == "implements" {
                    let content;
                    syn::parenthesized!(content in input);
                    let interfaces = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                    args.implements.extend(interfaces);
                } else {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("未知的 discoverable 参数: {ident}"),
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// 实现 #[discoverable] 宏
pub fn discoverable_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = if args.is_empty() {
        DiscoverableArgs::default()
    } else {
        match syn::parse::<DiscoverableArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let item = match syn::parse::<Item>(input) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error().into(),
    };

    match expand(&args, &item) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 生成原始条目、编译期实现断言以及启动时的描述符注册代码
pub fn expand(args: &DiscoverableArgs, item: &Item) -> Result<TokenStream2> {
    let (ident, vis, generics, is_interface) = match item {
        Item::Struct(item) => (&item.ident, &item.vis, &item.generics, false),
        Item::Enum(item) => (&item.ident, &item.vis, &item.generics, false),
        Item::Trait(item) => (&item.ident, &item.vis, &item.generics, true),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[discoverable] 只能用于结构体、枚举或 trait",
            ))
        }
    };

    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            generics,
            "#[discoverable] 不支持泛型类型，请为具体实例单独声明类型",
        ));
    }

    let ty = if is_interface {
        quote! { dyn #ident }
    } else {
        quote! { #ident }
    };
    let is_public = is_public(vis);
    let is_abstract = args.is_abstract;
    let implements = &args.implements;

    let assertions = implements.iter().enumerate().map(|(index, interface)| {
        let assert_fn = format_ident!("__assert_implements_{}", index);
        quote! {
            fn #assert_fn<T: ?Sized + #interface>() {}
            #assert_fn::<#ty>();
        }
    });

    let register_fn =
        generate_unique_ident("discover_type", &to_snake_case(&ident.to_string()));

    Ok(quote! {
        #item

        const _: fn() = || {
            #(#assertions)*
        };

        // 使用 ctor 在程序启动时提交类型描述符
        #[ctor::ctor]
        fn #register_fn() {
            ::infrastructure_common::submit_type_descriptor(
                ::infrastructure_common::TypeDescriptor::of::<#ty>(::core::module_path!())
                    .with_visibility(#is_public)
                    .with_abstract(#is_abstract)
                    .with_interface(#is_interface)
                    #(.implementing(::infrastructure_common::TypeRef::of::<dyn #implements>()))*
            );
        }
    })
}
