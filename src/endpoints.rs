// Closed set of series names exposed by api.estadisticasbcra.com.
use std::fmt;

/// Named series of the statistics API. The vocabulary is fixed and agreed
/// upon with the API; `as_str` yields the exact path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Milestones,
    Base,
    BaseUsd,
    BaseUsdOf,
    Reservas,
    BaseDivRes,
    Usd,
    UsdOf,
    UsdOfMinorista,
    VarUsdVsUsdOf,
    CirculacionMonetaria,
    BilletesYMonedas,
    EfectivoEnEntFin,
    DepositosCuentaEntFin,
    Depositos,
    CuentasCorrientes,
    CajasAhorro,
    PlazoFijo,
    TasaDepositos30Dias,
    Prestamos,
    TasaPrestamosPersonales,
    TasaAdelantosCuentaCorriente,
    PorcPrestamosVsDepositos,
    Lebac,
    Leliq,
    LebacUsd,
    LeliqUsd,
    LeliqUsdOf,
    TasaLeliq,
    M2PrivadoVariacionMensual,
    Cer,
    Uva,
    Uvi,
    TasaBadlar,
    TasaBaibar,
    TasaTm20,
    TasaPaseActivas1Dia,
    TasaPasePasivas1Dia,
    InflacionMensualOficial,
    InflacionInteranualOficial,
    InflacionEsperadaOficial,
    DifInflacionEsperadaVsInteranual,
    VarBaseMonetariaInteranual,
    VarUsdInteranual,
    VarUsdOficialInteranual,
    VarMervalInteranual,
    VarUsdAnual,
    VarUsdOfAnual,
    VarMervalAnual,
    Merval,
    MervalUsd,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Milestones => "milestones",
            Endpoint::Base => "base",
            Endpoint::BaseUsd => "base_usd",
            Endpoint::BaseUsdOf => "base_usd_of",
            Endpoint::Reservas => "reservas",
            Endpoint::BaseDivRes => "base_div_res",
            Endpoint::Usd => "usd",
            Endpoint::UsdOf => "usd_of",
            Endpoint::UsdOfMinorista => "usd_of_minorista",
            Endpoint::VarUsdVsUsdOf => "var_usd_vs_usd_of",
            Endpoint::CirculacionMonetaria => "circulacion_monetaria",
            Endpoint::BilletesYMonedas => "billetes_y_monedas",
            Endpoint::EfectivoEnEntFin => "efectivo_en_ent_fin",
            Endpoint::DepositosCuentaEntFin => "depositos_cuenta_ent_fin",
            Endpoint::Depositos => "depositos",
            Endpoint::CuentasCorrientes => "cuentas_corrientes",
            Endpoint::CajasAhorro => "cajas_ahorro",
            Endpoint::PlazoFijo => "plazo_fijo",
            Endpoint::TasaDepositos30Dias => "tasa_depositos_30_dias",
            Endpoint::Prestamos => "prestamos",
            Endpoint::TasaPrestamosPersonales => "tasa_prestamos_personales",
            Endpoint::TasaAdelantosCuentaCorriente => "tasa_adelantos_cuenta_corriente",
            Endpoint::PorcPrestamosVsDepositos => "porc_prestamos_vs_depositos",
            Endpoint::Lebac => "lebac",
            Endpoint::Leliq => "leliq",
            Endpoint::LebacUsd => "lebac_usd",
            Endpoint::LeliqUsd => "leliq_usd",
            Endpoint::LeliqUsdOf => "leliq_usd_of",
            Endpoint::TasaLeliq => "tasa_leliq",
            Endpoint::M2PrivadoVariacionMensual => "m2_privado_variacion_mensual",
            Endpoint::Cer => "cer",
            Endpoint::Uva => "uva",
            Endpoint::Uvi => "uvi",
            Endpoint::TasaBadlar => "tasa_badlar",
            Endpoint::TasaBaibar => "tasa_baibar",
            Endpoint::TasaTm20 => "tasa_tm20",
            Endpoint::TasaPaseActivas1Dia => "tasa_pase_activas_1_dia",
            Endpoint::TasaPasePasivas1Dia => "tasa_pase_pasivas_1_dia",
            Endpoint::InflacionMensualOficial => "inflacion_mensual_oficial",
            Endpoint::InflacionInteranualOficial => "inflacion_interanual_oficial",
            Endpoint::InflacionEsperadaOficial => "inflacion_esperada_oficial",
            Endpoint::DifInflacionEsperadaVsInteranual => "dif_inflacion_esperada_vs_interanual",
            Endpoint::VarBaseMonetariaInteranual => "var_base_monetaria_interanual",
            Endpoint::VarUsdInteranual => "var_usd_interanual",
            Endpoint::VarUsdOficialInteranual => "var_usd_oficial_interanual",
            Endpoint::VarMervalInteranual => "var_merval_interanual",
            Endpoint::VarUsdAnual => "var_usd_anual",
            Endpoint::VarUsdOfAnual => "var_usd_of_anual",
            Endpoint::VarMervalAnual => "var_merval_anual",
            Endpoint::Merval => "merval",
            Endpoint::MervalUsd => "merval_usd",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
